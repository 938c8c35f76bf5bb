#![allow(missing_docs)]

use ndarray::Array1;
use petri::simulation::grid::SpatialGrid;
use petri::simulation::params::Params;

fn pos(x: f32, y: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y])
}

// Default params: 600x600 environment with 20x20 partitions -> 30x30 grid.
fn create_test_grid() -> SpatialGrid {
    SpatialGrid::new(&Params::default())
}

#[test]
fn test_grid_dimensions() {
    let grid = create_test_grid();
    assert_eq!(grid.cols(), 30);
    assert_eq!(grid.rows(), 30);
    assert!(grid.is_empty());

    // Non-divisible extents round the bucket count up.
    let params = Params {
        env_width: 610.0,
        env_height: 590.0,
        ..Params::default()
    };
    let grid = SpatialGrid::new(&params);
    assert_eq!(grid.cols(), 31);
    assert_eq!(grid.rows(), 30);
}

#[test]
fn test_bucket_for_center_and_corners() {
    let grid = create_test_grid();

    // The origin sits at the environment center.
    assert_eq!(grid.bucket_for(&pos(0.0, 0.0)), (15, 15));

    // Exact corners.
    assert_eq!(grid.bucket_for(&pos(-300.0, -300.0)), (0, 0));
    assert_eq!(grid.bucket_for(&pos(-300.0 + 19.9, -300.0)), (0, 0));
    assert_eq!(grid.bucket_for(&pos(-300.0 + 20.0, -300.0)), (1, 0));

    // The far border itself maps into the last bucket, not one past it.
    assert_eq!(grid.bucket_for(&pos(300.0, 300.0)), (29, 29));
}

#[test]
fn test_bucket_for_clamps_out_of_bounds_positions() {
    let grid = create_test_grid();

    // Positions briefly beyond the borders still map inside the grid.
    assert_eq!(grid.bucket_for(&pos(1000.0, -1000.0)), (29, 0));
    assert_eq!(grid.bucket_for(&pos(-1000.0, 1000.0)), (0, 29));
}

#[test]
fn test_insert_and_remove() {
    let mut grid = create_test_grid();

    grid.insert(0, (5, 5));
    grid.insert(1, (5, 5));
    grid.insert(2, (5, 5));
    assert_eq!(grid.len(), 3);
    assert!(grid.contains(0, (5, 5)));
    assert!(grid.contains(1, (5, 5)));
    assert!(grid.contains(2, (5, 5)));

    // Swap-remove keeps the remaining members; order is not meaningful.
    grid.remove(0, (5, 5));
    assert_eq!(grid.len(), 2);
    assert!(!grid.contains(0, (5, 5)));
    assert!(grid.contains(1, (5, 5)));
    assert!(grid.contains(2, (5, 5)));

    // Removing an agent that is not in the bucket is a no-op.
    grid.remove(7, (5, 5));
    assert_eq!(grid.len(), 2);
}

#[test]
fn test_neighborhood_interior() {
    let mut grid = create_test_grid();

    // One agent in each bucket of the 3x3 block around (10, 10), plus one
    // outside it.
    let mut expected = Vec::new();
    let mut next = 0;
    for y in 9..=11 {
        for x in 9..=11 {
            grid.insert(next, (x, y));
            expected.push(next);
            next += 1;
        }
    }
    grid.insert(99, (13, 10));

    let mut found: Vec<usize> = grid.neighborhood(10, 10).collect();
    found.sort_unstable();
    assert_eq!(found, expected);
}

#[test]
fn test_neighborhood_clips_at_edges() {
    let mut grid = create_test_grid();

    // At the corner only the 2x2 block exists.
    grid.insert(0, (0, 0));
    grid.insert(1, (1, 0));
    grid.insert(2, (0, 1));
    grid.insert(3, (1, 1));
    grid.insert(4, (2, 2)); // outside the corner neighborhood

    let mut found: Vec<usize> = grid.neighborhood(0, 0).collect();
    found.sort_unstable();
    assert_eq!(found, vec![0, 1, 2, 3]);

    // The far corner clips symmetrically.
    grid.insert(5, (29, 29));
    let found: Vec<usize> = grid.neighborhood(29, 29).collect();
    assert_eq!(found, vec![5]);
}

#[test]
#[should_panic(expected = "outside")]
fn test_out_of_range_insert_panics() {
    let mut grid = create_test_grid();
    grid.insert(0, (30, 0));
}
