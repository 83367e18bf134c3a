use std::sync::Arc;

use conway::{
    Cell, Coord, Grid, build_grid, count_live_neighbors, create_grid, create_grid_seeded, step,
    step_coroutines,
};

fn grid(rows: &[[u8; 4]]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

#[test]
fn creates_a_random_nxn_grid() {
    for n in [1, 3, 10, 75] {
        let grid = create_grid(n);
        assert_eq!(grid.height(), n);
        assert!(grid.rows().all(|row| row.len() == n));
        assert!(grid.to_rows().iter().flatten().all(|&v| v <= 1));
    }
}

#[test]
fn create_grid_zero_is_empty() {
    let grid = create_grid(0);
    assert!(grid.is_empty());
    assert_eq!(grid.height(), 0);
}

#[test]
fn count_live_neighbors_returns_the_correct_count() {
    let g = Grid::from_rows(&[[0u8, 1, 1], [1, 0, 1], [0, 0, 1]]).unwrap();
    assert_eq!(count_live_neighbors(&g, Coord::new(1, 0)), 3);
}

#[test]
fn neighbor_counts_stay_in_range_and_exclude_self() {
    let g = create_grid_seeded(12, 2024);
    for y in 0..g.height() {
        for x in 0..g.width() {
            let coord = Coord::new(x, y);
            let count = count_live_neighbors(&g, coord);
            assert!(count <= 8);

            // Flipping the cell itself must not change its own count
            let mut flipped = g.clone();
            flipped.toggle(coord);
            assert_eq!(count_live_neighbors(&flipped, coord), count);
        }
    }
}

#[test]
fn step_returns_the_next_iteration_of_life() {
    let start = grid(&[[0, 1, 1, 1], [1, 0, 1, 0], [0, 0, 1, 1], [1, 1, 0, 0]]);
    let expected = grid(&[[0, 1, 1, 1], [0, 0, 0, 0], [1, 0, 1, 1], [0, 1, 1, 0]]);

    let next = step(&start);
    for y in 0..4 {
        assert_eq!(next.row(y), expected.row(y), "row {y}");
    }
    assert_eq!(next, expected);
}

#[test]
fn stepping_the_expected_output_again() {
    let second = step(&grid(&[[0, 1, 1, 1], [0, 0, 0, 0], [1, 0, 1, 1], [0, 1, 1, 0]]));
    assert_eq!((second.width(), second.height()), (4, 4));
    assert_eq!(
        second,
        grid(&[[0, 0, 1, 0], [0, 0, 0, 0], [0, 0, 1, 1], [0, 1, 1, 1]])
    );
}

#[test]
fn all_dead_is_a_fixed_point() {
    for n in [0, 1, 2, 9, 30] {
        let dead = build_grid(&mut Cell::Dead, n);
        assert_eq!(step(&dead), dead);
    }
}

#[test]
fn step_is_deterministic_and_keeps_dimensions() {
    let g = create_grid_seeded(33, 11);
    let a = step(&g);
    let b = step(&g);
    assert_eq!(a, b);
    assert_eq!((a.width(), a.height()), (33, 33));

    let wide = Grid::new(9, 4);
    let next = step(&wide);
    assert_eq!((next.width(), next.height()), (9, 4));
}

#[test]
fn step_does_not_touch_its_input() {
    let g = create_grid_seeded(16, 8);
    let before = g.clone();
    let _ = step(&g);
    assert_eq!(g, before);
}

#[tokio::test]
async fn coroutine_step_agrees_with_step() {
    let start = grid(&[[0, 1, 1, 1], [1, 0, 1, 0], [0, 0, 1, 1], [1, 1, 0, 0]]);
    let next = step_coroutines(Arc::new(start.clone())).await.unwrap();
    assert_eq!(next, step(&start));
}
