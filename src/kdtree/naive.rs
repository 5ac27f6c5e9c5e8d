use crate::error::Result;
use crate::kdtree::PointSet;
use crate::kdtree::validation::collect_points;
use crate::models::Point;

/// Point set that answers every query by scanning all stored points.
///
/// Linear per query; used as the reference answer for [`KdTree`](crate::KdTree).
#[derive(Debug, Clone, Default)]
pub struct NaivePointSet {
    points: Vec<Point>,
}

impl NaivePointSet {
    /// Store every point, with the same validation as `KdTree::build`
    pub fn build<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        Self::build_from_entries(Some(points.into_iter().map(Some)))
    }

    /// Store possibly-absent entries, failing on any absent value
    pub fn build_from_entries<I>(entries: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<Point>>,
    {
        Ok(Self {
            points: collect_points(entries)?,
        })
    }

    /// Stored points in input order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The first stored point with the smallest squared distance to `(x, y)`
    pub fn nearest(&self, x: f64, y: f64) -> Option<Point> {
        let query = Point::new(x, y);
        let mut iter = self.points.iter();
        let mut best = *iter.next()?;
        let mut best_dist = best.squared_distance_to(&query);
        for point in iter {
            let dist = point.squared_distance_to(&query);
            if dist < best_dist {
                best = *point;
                best_dist = dist;
            }
        }
        Some(best)
    }
}

impl PointSet for NaivePointSet {
    fn nearest(&self, x: f64, y: f64) -> Option<Point> {
        NaivePointSet::nearest(self, x, y)
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
