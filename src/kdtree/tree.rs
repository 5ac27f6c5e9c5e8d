use crate::config;
use crate::error::Result;
use crate::kdtree::validation::collect_points;
use crate::kdtree::{Axis, KdNode, PointSet};
use crate::models::Point;
use rayon::prelude::*;

/// Static point set backed by an unbalanced 2-D search tree.
///
/// The root splits on x, its children on y, and so on. Points are inserted
/// in input order, so the tree shape (and worst-case query cost) depends on
/// that order; query results do not.
#[derive(Debug, Default)]
pub struct KdTree {
    root: Option<Box<KdNode>>,
    len: usize,
    height: usize,
}

impl KdTree {
    /// Build a tree containing every point, duplicates included.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// if any point has a NaN or infinite coordinate.
    pub fn build<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        Self::build_from_entries(Some(points.into_iter().map(Some)))
    }

    /// Build from a possibly-absent collection of possibly-absent points.
    ///
    /// An absent collection or any absent entry fails the whole build; no
    /// partially built tree is ever returned.
    pub fn build_from_entries<I>(entries: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<Point>>,
    {
        let points = collect_points(entries)?;
        let mut tree = Self::default();
        for point in points {
            tree.insert(point);
        }

        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!(
                "KDTREE: built {} nodes, height {}",
                tree.len, tree.height
            );
        }

        Ok(tree)
    }

    fn insert(&mut self, point: Point) {
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if node.routes_low(&point, Axis::at_depth(depth)) {
                &mut node.low
            } else {
                &mut node.high
            };
            depth += 1;
        }
        *slot = Some(Box::new(KdNode::new(point)));
        self.len += 1;
        self.height = self.height.max(depth + 1);
    }

    /// Number of stored points, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree holds no points
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels; 0 for an empty tree
    pub fn height(&self) -> usize {
        self.height
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&KdNode> {
        self.root.as_deref()
    }

    /// Stored points in pre-order (node, low subtree, high subtree)
    pub fn points(&self) -> Points<'_> {
        Points {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// The stored point closest to `(x, y)`, or `None` if the tree is empty.
    ///
    /// The near side of every split is searched first; the far side is only
    /// searched while the best squared distance so far is at least the
    /// squared axis gap. A stored point equal to the query is returned as
    /// soon as it is reached.
    pub fn nearest(&self, x: f64, y: f64) -> Option<Point> {
        let root = self.root.as_deref()?;
        let query = Point::new(x, y);

        let mut best = root.point;
        let mut best_dist = best.squared_distance_to(&query);

        // (node, depth, squared axis gap the far side must beat). The far
        // child is pushed beneath the near one so its bound is checked only
        // after the whole near subtree has been searched.
        let mut stack: Vec<(&KdNode, usize, Option<f64>)> = vec![(root, 0, None)];

        while let Some((node, depth, bound)) = stack.pop() {
            if let Some(gap_sq) = bound {
                if best_dist < gap_sq {
                    continue;
                }
            }

            if node.point == query {
                return Some(node.point);
            }

            let dist = node.point.squared_distance_to(&query);
            if dist < best_dist {
                best = node.point;
                best_dist = dist;
            }

            let axis = Axis::at_depth(depth);
            let gap = query.coord(axis) - node.point.coord(axis);
            let (near, far) = if gap < 0.0 {
                (node.low(), node.high())
            } else {
                (node.high(), node.low())
            };

            if let Some(far) = far {
                stack.push((far, depth + 1, Some(gap * gap)));
            }
            if let Some(near) = near {
                stack.push((near, depth + 1, None));
            }
        }

        Some(best)
    }

    /// Answer a batch of queries, in order.
    ///
    /// Batches at or above `KD_PARALLEL_BATCH_THRESHOLD` are spread across
    /// the rayon thread pool.
    pub fn nearest_batch(&self, queries: &[(f64, f64)]) -> Vec<Option<Point>> {
        if queries.len() >= config::parallel_batch_threshold() {
            queries
                .par_iter()
                .map(|&(x, y)| self.nearest(x, y))
                .collect()
        } else {
            queries.iter().map(|&(x, y)| self.nearest(x, y)).collect()
        }
    }
}

impl PointSet for KdTree {
    fn nearest(&self, x: f64, y: f64) -> Option<Point> {
        KdTree::nearest(self, x, y)
    }

    fn len(&self) -> usize {
        self.len
    }
}

// Dropping a long chain of boxed nodes recursively can overflow the stack
// on degenerate (sorted) input.
impl Drop for KdTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<KdNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.low.take());
            stack.extend(node.high.take());
        }
    }
}

/// Pre-order iterator over the points of a [`KdTree`]
pub struct Points<'a> {
    stack: Vec<&'a KdNode>,
}

impl<'a> Iterator for Points<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(high) = node.high() {
            self.stack.push(high);
        }
        if let Some(low) = node.low() {
            self.stack.push(low);
        }
        Some(&node.point)
    }
}
