use crate::kdtree::Axis;
use crate::models::Point;

/// A tree node owning one point and up to two disjoint subtrees.
///
/// `low` holds points whose coordinate on this node's axis is strictly less
/// than the node's; `high` holds the rest (ties included).
#[derive(Debug)]
pub struct KdNode {
    pub(crate) point: Point,
    pub(crate) low: Option<Box<KdNode>>,
    pub(crate) high: Option<Box<KdNode>>,
}

impl KdNode {
    pub(crate) fn new(point: Point) -> Self {
        Self {
            point,
            low: None,
            high: None,
        }
    }

    /// The point stored at this node
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Subtree of points strictly below this node on its axis
    pub fn low(&self) -> Option<&KdNode> {
        self.low.as_deref()
    }

    /// Subtree of points at or above this node on its axis
    pub fn high(&self) -> Option<&KdNode> {
        self.high.as_deref()
    }

    /// Whether `point` belongs in the low subtree of a node split on `axis`
    #[inline]
    pub(crate) fn routes_low(&self, point: &Point, axis: Axis) -> bool {
        point.coord(axis) < self.point.coord(axis)
    }
}
