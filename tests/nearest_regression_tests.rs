//! Integration tests for nearest-point queries
//!
//! These tests check the k-d tree against brute force on seeded random data,
//! and pin down the behaviors callers rely on: empty sets, exact hits,
//! duplicates, input-order independence, and construction failures.

use kdpoint::tools::{compare_point_sets, random_points, random_queries};
use kdpoint::{Error, KdTree, NaivePointSet, Point, PointSet};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

fn min_squared_distance(points: &[Point], x: f64, y: f64) -> f64 {
    let query = Point::new(x, y);
    points
        .iter()
        .map(|p| p.squared_distance_to(&query))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn test_nearest_is_true_minimum_on_random_sets() {
    for (seed, n) in [(1u64, 1usize), (2, 2), (3, 17), (4, 250), (5, 2_000)] {
        let points = random_points(n, seed);
        let tree = KdTree::build(points.clone()).unwrap();
        for (x, y) in random_queries(400, seed + 100) {
            let found = tree.nearest(x, y).expect("non-empty tree");
            assert_eq!(
                found.squared_distance_to(&Point::new(x, y)),
                min_squared_distance(&points, x, y),
                "n={n} seed={seed} query=({x}, {y})"
            );
            assert!(points.contains(&found));
        }
    }
}

#[test]
fn test_empty_set_returns_none_everywhere() {
    let tree = KdTree::build(Vec::<Point>::new()).unwrap();
    for (x, y) in random_queries(50, 9) {
        assert_eq!(tree.nearest(x, y), None);
    }
    assert_eq!(tree.nearest(f64::MAX, f64::MIN), None);
}

#[test]
fn test_non_finite_query_returns_a_stored_point() {
    let points = random_points(200, 15);
    let tree = KdTree::build(points.clone()).unwrap();
    for (x, y) in [
        (f64::NAN, 1.0),
        (0.5, f64::NAN),
        (f64::INFINITY, f64::NEG_INFINITY),
    ] {
        let found = tree.nearest(x, y).expect("non-empty tree");
        assert!(points.contains(&found), "query ({x}, {y}) gave {found}");
    }

    let empty = KdTree::build(Vec::<Point>::new()).unwrap();
    assert_eq!(empty.nearest(f64::NAN, 1.0), None);
    assert_eq!(empty.nearest(f64::INFINITY, f64::NEG_INFINITY), None);
}

#[test]
fn test_stored_coordinate_returns_that_point() {
    let points = random_points(500, 21);
    let tree = KdTree::build(points.clone()).unwrap();
    for p in &points {
        assert_eq!(tree.nearest(p.x, p.y), Some(*p));
    }
}

#[test]
fn test_duplicates_are_separate_nodes() {
    let mut points = random_points(100, 31);
    let dup = points[40];
    points.extend([dup, dup, dup]);
    let tree = KdTree::build(points.clone()).unwrap();
    assert_eq!(tree.len(), 103);
    assert_eq!(tree.points().count(), 103);
    assert_eq!(tree.points().filter(|p| **p == dup).count(), 4);
    assert_eq!(tree.nearest(dup.x, dup.y), Some(dup));
}

#[test]
fn test_permutations_give_same_answers() {
    let points = random_points(400, 41);
    let mut shuffled = points.clone();
    let mut rng = StdRng::seed_from_u64(42);
    shuffled.shuffle(&mut rng);
    let mut reversed = points.clone();
    reversed.reverse();

    let a = KdTree::build(points).unwrap();
    let b = KdTree::build(shuffled).unwrap();
    let c = KdTree::build(reversed).unwrap();
    for (x, y) in random_queries(1_000, 43) {
        let query = Point::new(x, y);
        let da = a.nearest(x, y).unwrap().squared_distance_to(&query);
        let db = b.nearest(x, y).unwrap().squared_distance_to(&query);
        let dc = c.nearest(x, y).unwrap().squared_distance_to(&query);
        assert_eq!(da, db);
        assert_eq!(da, dc);
    }
}

#[test]
fn test_concrete_scenarios() {
    let tree = KdTree::build(vec![
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(3.0, 3.0),
        Point::new(0.0, 5.0),
    ])
    .unwrap();
    assert_eq!(tree.nearest(2.1, 2.1), Some(Point::new(2.0, 2.0)));
    assert_eq!(tree.nearest(-10.0, -10.0), Some(Point::new(1.0, 1.0)));
    assert_eq!(tree.nearest(0.0, 5.0), Some(Point::new(0.0, 5.0)));

    let single = KdTree::build(vec![Point::new(5.0, 5.0)]).unwrap();
    assert_eq!(single.nearest(100.0, 100.0), Some(Point::new(5.0, 5.0)));
    assert_eq!(single.nearest(5.0, 5.0), Some(Point::new(5.0, 5.0)));
}

#[test]
fn test_equidistant_ties_only_assert_distance() {
    let tree = KdTree::build(vec![
        Point::new(-1.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(0.0, -1.0),
    ])
    .unwrap();
    let found = tree.nearest(0.0, 0.0).unwrap();
    assert_eq!(found.squared_distance_to(&Point::new(0.0, 0.0)), 1.0);
}

#[test]
fn test_clustered_and_collinear_inputs() {
    // Many points sharing an x coordinate exercise the ties-go-high rule.
    let mut points: Vec<Point> = (0..300).map(|i| Point::new(0.5, i as f64 * 0.01)).collect();
    points.extend((0..300).map(|i| Point::new(i as f64 * 0.01, 0.5)));
    let tree = KdTree::build(points.clone()).unwrap();
    let naive = NaivePointSet::build(points).unwrap();
    let stats = compare_point_sets(&tree, &naive, &random_queries(2_000, 51));
    assert_eq!(stats.mismatches, 0);
}

#[test]
fn test_construction_failures() {
    let absent: Option<Vec<Option<Point>>> = None;
    assert!(matches!(
        KdTree::build_from_entries(absent),
        Err(Error::InvalidArgument { arg: "points", .. })
    ));

    let with_hole = vec![Some(Point::new(0.0, 0.0)), None];
    assert!(matches!(
        KdTree::build_from_entries(Some(with_hole.clone())),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        NaivePointSet::build_from_entries(Some(with_hole)),
        Err(Error::InvalidArgument { .. })
    ));

    assert!(matches!(
        KdTree::build(vec![Point::new(f64::INFINITY, 0.0)]),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_concurrent_queries_share_one_tree() {
    let points = random_points(1_000, 61);
    let tree = KdTree::build(points.clone()).unwrap();
    let queries = random_queries(2_000, 62);

    std::thread::scope(|scope| {
        for chunk in queries.chunks(500) {
            let tree = &tree;
            let points = &points;
            scope.spawn(move || {
                for &(x, y) in chunk {
                    let found = tree.nearest(x, y).unwrap();
                    assert_eq!(
                        found.squared_distance_to(&Point::new(x, y)),
                        min_squared_distance(points, x, y)
                    );
                }
            });
        }
    });

    let batch = tree.nearest_batch(&queries);
    for (&(x, y), found) in queries.iter().zip(batch) {
        assert_eq!(found, tree.nearest(x, y));
    }
}

#[test]
fn test_point_set_trait_reports_size() {
    let points = random_points(10, 71);
    let tree = KdTree::build(points.clone()).unwrap();
    let naive = NaivePointSet::build(points).unwrap();
    assert_eq!(PointSet::len(&tree), 10);
    assert_eq!(PointSet::len(&naive), 10);
    assert!(!PointSet::is_empty(&tree));
}
