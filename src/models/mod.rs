/// 2-D point value type
pub mod point;
/// Weighted term for prefix matching
pub mod term;

pub use point::Point;
pub use term::Term;
