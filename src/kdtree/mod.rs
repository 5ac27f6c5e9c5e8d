//! Nearest-neighbor point sets
//!
//! This module contains the 2-D search tree and its supporting pieces:
//! - Splitting axis derived from depth parity
//! - Tree nodes with exclusively owned children
//! - The k-d tree itself (construction and pruning nearest search)
//! - A brute-force point set used as a reference
//! - Input validation shared by every point set

/// Splitting axis selection by depth parity
pub mod axis;
/// Brute-force reference point set
pub mod naive;
/// Tree node with low / high child slots
pub mod node;
/// The k-d tree point set
pub mod tree;
mod validation;

pub use axis::Axis;
pub use naive::NaivePointSet;
pub use node::KdNode;
pub use tree::KdTree;

use crate::models::Point;

/// A static collection of 2-D points answering nearest-point queries.
///
/// Implementations are immutable once built, so a shared reference can be
/// queried from any number of threads at once.
pub trait PointSet {
    /// The stored point closest to `(x, y)`, or `None` if the set is empty.
    ///
    /// When several points are equally close, which one is returned is
    /// unspecified.
    fn nearest(&self, x: f64, y: f64) -> Option<Point>;

    /// Number of stored points, duplicates included.
    fn len(&self) -> usize;

    /// True when no points are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
