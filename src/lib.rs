//! kdpoint - exact nearest-neighbor queries over static 2-D point sets
//!
//! A point set is built once from a collection of points and then queried
//! any number of times, from any number of threads. The main structure is an
//! unbalanced 2-D search tree (k-d tree) with a pruning nearest search; a
//! brute-force set is provided as a reference.
//!
//! # Example
//! ```
//! use kdpoint::{KdTree, Point};
//!
//! let tree = KdTree::build(vec![
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(3.0, 3.0),
//!     Point::new(0.0, 5.0),
//! ])
//! .unwrap();
//! assert_eq!(tree.nearest(2.1, 2.1), Some(Point::new(2.0, 2.0)));
//! ```
//!
//! The crate also carries a small prefix-matching utility over weighted
//! terms ([`autocomplete`]).

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Prefix matching over weighted terms
pub mod autocomplete;
/// Environment-driven tuning knobs
pub mod config;
mod debug;
/// Error and result types
pub mod error;
/// Point sets: the k-d tree and its brute-force reference
pub mod kdtree;
/// Core value types (Point, Term)
pub mod models;
/// Input loading, random data, and cross-checking helpers
pub mod tools;

pub use autocomplete::{Autocomplete, BinaryRangeSearch};
pub use error::{Error, Result};
pub use kdtree::{KdTree, NaivePointSet, PointSet};
pub use models::{Point, Term};
