//! Prefix matching over weighted terms
//!
//! Terms are kept sorted by query so that every term sharing a prefix sits in
//! one contiguous run, found with two binary searches.

/// Sorted-array prefix search
pub mod binary_range_search;

pub use binary_range_search::BinaryRangeSearch;

use crate::models::Term;

/// Answers "every term starting with this prefix, heaviest first".
pub trait Autocomplete {
    /// All terms whose query starts with `prefix`, in descending weight order
    fn all_matches(&self, prefix: &str) -> Vec<Term>;
}
