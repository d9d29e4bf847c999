//! End-to-end behavior of the grid, rule engine and pattern library.

use rand::{Rng, SeedableRng, rngs::StdRng};
use term_life::domain::{
    Grid, GridError, NEIGHBOR_OFFSETS, Topology, live_neighbors, pattern_bounds, presets, step,
};

fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .map(|(r, c, _)| (r, c))
        .collect()
}

fn random_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    grid.seed_random(&mut StdRng::seed_from_u64(seed));
    grid
}

#[test]
fn test_neighborhood_has_eight_distinct_offsets() {
    let mut offsets = NEIGHBOR_OFFSETS.to_vec();
    offsets.sort_unstable();
    offsets.dedup();
    assert_eq!(offsets.len(), 8);
    assert!(!offsets.contains(&(0, 0)));
}

#[test]
fn test_step_is_deterministic() {
    for topology in [Topology::Torus, Topology::Plane] {
        let mut a = random_grid(17, 23, 11);
        let mut b = a.clone();
        for _ in 0..10 {
            step(&mut a, topology);
            step(&mut b, topology);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_rule_holds_for_every_cell() {
    for (seed, topology) in [(1, Topology::Torus), (2, Topology::Plane), (3, Topology::Torus)] {
        let before = random_grid(12, 19, seed);
        let mut after = before.clone();
        step(&mut after, topology);

        for (row, col, cell) in before.iter_cells() {
            let n = live_neighbors(&before, row, col, topology);
            let expected = match n {
                3 => true,
                2 => cell.is_alive(),
                _ => false,
            };
            assert_eq!(after.get(row, col), expected, "({row}, {col}) with {n} neighbors");
        }
    }
}

#[test]
fn test_glider_translates_on_small_torus() {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.place_pattern(&presets::glider(), 0, 0).unwrap();
    let start = alive_cells(&grid);

    for _ in 0..4 {
        step(&mut grid, Topology::Torus);
    }

    let mut expected: Vec<_> = start.iter().map(|&(r, c)| ((r + 1) % 5, (c + 1) % 5)).collect();
    expected.sort_unstable();
    assert_eq!(alive_cells(&grid), expected);
}

#[test]
fn test_glider_wraps_all_the_way_around() {
    let mut grid = Grid::new(6, 6).unwrap();
    grid.place_pattern(&presets::glider(), 0, 0).unwrap();
    let start = grid.clone();

    // 6 cells of diagonal travel at one cell per 4 generations
    for _ in 0..24 {
        step(&mut grid, Topology::Torus);
    }
    assert_eq!(grid, start);
}

#[test]
fn test_glider_dies_against_plane_edge() {
    let mut grid = Grid::new(6, 6).unwrap();
    grid.place_pattern(&presets::glider(), 0, 0).unwrap();
    for _ in 0..40 {
        step(&mut grid, Topology::Plane);
    }
    // Collapses into a block in the far corner rather than travelling on
    let settled = grid.clone();
    step(&mut grid, Topology::Plane);
    assert_eq!(grid, settled);
    assert_eq!(alive_cells(&grid), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
}

#[test]
fn test_gosper_gun_emits_gliders() {
    let mut grid = Grid::new(40, 60).unwrap();
    grid.place_pattern(&presets::gosper_glider_gun(), 0, 0).unwrap();
    assert_eq!(grid.population(), 36);

    for _ in 0..30 {
        step(&mut grid, Topology::Plane);
    }
    assert_eq!(grid.population(), 41);

    for _ in 0..30 {
        step(&mut grid, Topology::Plane);
    }
    assert_eq!(grid.population(), 46);
}

#[test]
fn test_clear_then_step_is_all_dead() {
    let mut grid = random_grid(9, 14, 8);
    grid.clear();
    step(&mut grid, Topology::Torus);
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_rejected_placement_is_byte_for_byte_noop() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..50 {
        let rows = rng.random_range(1..15);
        let cols = rng.random_range(1..45);
        let grid = random_grid(rows, cols, rng.random());
        let before = grid.clone();

        for pattern in presets::all_patterns() {
            let (p_rows, p_cols) = pattern_bounds(&pattern);
            let origin_row = rng.random_range(0..rows + 3);
            let origin_col = rng.random_range(0..cols + 3);
            let fits = origin_row + p_rows <= rows && origin_col + p_cols <= cols;

            let mut probe = grid.clone();
            let result = probe.place_pattern(&pattern, origin_row, origin_col);
            if fits {
                assert!(result.is_ok());
            } else {
                assert!(matches!(result, Err(GridError::PatternOutOfBounds { .. })));
                assert_eq!(probe, before);
            }
        }
        assert_eq!(grid, before);
    }
}

#[test]
fn test_double_toggle_keeps_neighbor_counts() {
    let grid = random_grid(7, 9, 4);
    for topology in [Topology::Torus, Topology::Plane] {
        let back = topology.toggled().toggled();
        assert_eq!(back, topology);
        for (row, col, _) in grid.iter_cells() {
            assert_eq!(
                live_neighbors(&grid, row, col, topology),
                live_neighbors(&grid, row, col, back)
            );
        }
    }
}

#[test]
fn test_degenerate_dimensions_step() {
    // One row on a torus: the row above and below is the row itself
    let mut line = Grid::new(1, 5).unwrap();
    line.set(0, 1, true);
    line.set(0, 2, true);
    line.set(0, 3, true);
    assert_eq!(live_neighbors(&line, 0, 2, Topology::Torus), 8);
    assert_eq!(live_neighbors(&line, 0, 2, Topology::Plane), 2);

    step(&mut line, Topology::Plane);
    assert_eq!(alive_cells(&line), vec![(0, 2)]);
}
