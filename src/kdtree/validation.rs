//! Validation helpers shared by point-set constructors.

use crate::error::{Error, Result};
use crate::models::Point;

/// Collect possibly-absent entries into points, failing on the first
/// absent collection, absent entry, or non-finite coordinate.
pub(crate) fn collect_points<I>(entries: Option<I>) -> Result<Vec<Point>>
where
    I: IntoIterator<Item = Option<Point>>,
{
    let entries = entries.ok_or_else(|| Error::invalid_points("point collection is absent"))?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let point =
                entry.ok_or_else(|| Error::invalid_points(format!("entry {index} is absent")))?;
            validate_point(index, point)
        })
        .collect()
}

/// Reject NaN or infinite coordinates.
pub(crate) fn validate_point(index: usize, point: Point) -> Result<Point> {
    if !point.is_finite() {
        return Err(Error::invalid_points(format!(
            "entry {index} has a non-finite coordinate {point}"
        )));
    }
    Ok(point)
}
