use crate::error::{Error, Result};
use crate::kdtree::PointSet;
use crate::models::{Point, Term};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// Load a point file: one `x y` pair per line.
///
/// Blank lines and `#` comments are ignored, and an optional first line
/// holding a single integer (the point count) is skipped.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let text = fs::read_to_string(path.as_ref())?;
    let points = parse_points(&text)?;

    if cfg!(debug_assertions) && crate::debug::debug_enabled() {
        eprintln!(
            "TOOLS: loaded {} points from {}",
            points.len(),
            path.as_ref().display()
        );
    }

    Ok(points)
}

/// Parse point file contents; see [`load_points`].
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (line_no, line) in data_lines(text) {
        let mut tokens = line.split_whitespace();
        let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected two coordinates, got '{line}'"),
            });
        };
        let point = Point::new(parse_coord(x, line_no)?, parse_coord(y, line_no)?);
        points.push(point);
    }
    Ok(points)
}

fn parse_coord(token: &str, line: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|_| Error::Parse {
        line,
        message: format!("'{token}' is not a number"),
    })
}

/// Load a term file: `weight<whitespace>query` per line.
///
/// The query is everything after the weight, so it may contain spaces. An
/// optional leading count line is skipped.
pub fn load_terms<P: AsRef<Path>>(path: P) -> Result<Vec<Term>> {
    let text = fs::read_to_string(path.as_ref())?;
    let terms = parse_terms(&text)?;

    if cfg!(debug_assertions) && crate::debug::debug_enabled() {
        eprintln!(
            "TOOLS: loaded {} terms from {}",
            terms.len(),
            path.as_ref().display()
        );
    }

    Ok(terms)
}

/// Parse term file contents; see [`load_terms`].
pub fn parse_terms(text: &str) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    for (line_no, line) in data_lines(text) {
        let Some((weight, query)) = line.split_once(char::is_whitespace) else {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected '<weight> <query>', got '{line}'"),
            });
        };
        let weight = weight.parse::<u64>().map_err(|_| Error::Parse {
            line: line_no,
            message: format!("'{weight}' is not a non-negative integer weight"),
        })?;
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::Parse {
                line: line_no,
                message: "empty query".to_string(),
            });
        }
        terms.push(Term::new(query, weight));
    }
    Ok(terms)
}

/// Non-empty, non-comment lines with their 1-based numbers, minus a leading
/// count line if present.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .peekable();

    let has_count_line = lines
        .peek()
        .is_some_and(|(_, first)| first.parse::<usize>().is_ok());
    if has_count_line {
        lines.next();
    }
    lines
}

/// `n` points drawn uniformly from the unit square, reproducible by `seed`.
pub fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::from((rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))))
        .collect()
}

/// `n` query coordinates from a slightly larger square than
/// [`random_points`], so some queries land outside the data.
pub fn random_queries(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(-0.1..1.1), rng.gen_range(-0.1..1.1)))
        .collect()
}

/// Outcome of comparing a point set against a reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchStats {
    /// Queries answered.
    pub queries: usize,
    /// Queries whose answer distance differed from the reference answer.
    pub mismatches: usize,
}

/// Compare `candidate` against `reference` on every query.
///
/// Answers count as equal when they are at the same distance, since ties may
/// resolve to different points.
pub fn compare_point_sets<A, B>(candidate: &A, reference: &B, queries: &[(f64, f64)]) -> MatchStats
where
    A: PointSet + ?Sized,
    B: PointSet + ?Sized,
{
    let mut stats = MatchStats::default();
    for &(x, y) in queries {
        let query = Point::new(x, y);
        let got = candidate.nearest(x, y).map(|p| p.squared_distance_to(&query));
        let want = reference.nearest(x, y).map(|p| p.squared_distance_to(&query));
        stats.queries += 1;
        if got != want {
            if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                eprintln!("TOOLS: mismatch at {query}: got {got:?}, want {want:?}");
            }
            stats.mismatches += 1;
        }
    }
    stats
}
