//! Step throughput for a range of grid sizes, torus vs plane

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use term_life::domain::{Grid, Topology, step};

fn benchmark_step(rows: usize, cols: usize, topology: Topology, iterations: u32) -> f64 {
    let mut grid = match Grid::new(rows, cols) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("skipping {rows}x{cols}: {err}");
            return 0.0;
        }
    };
    grid.seed_random(&mut StdRng::seed_from_u64(0x5EED));

    let start = Instant::now();
    for _ in 0..iterations {
        step(&mut grid, topology);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life Step Benchmark ===\n");

    // Typical terminal sizes first, then larger grids
    let sizes = [
        (24, 80),
        (50, 200),
        (100, 300),
        (500, 500),
        (1000, 1000),
    ];
    let iterations = 20;

    println!(
        "{:>12} {:>12} {:>12} {:>14}",
        "Size", "Torus ms", "Plane ms", "Mcells/s"
    );
    println!("{:-<54}", "");

    for (rows, cols) in sizes {
        let torus_ms = benchmark_step(rows, cols, Topology::Torus, iterations);
        let plane_ms = benchmark_step(rows, cols, Topology::Plane, iterations);
        let cells = (rows * cols) as f64;
        let throughput = if torus_ms > 0.0 {
            cells / (torus_ms / 1000.0) / 1_000_000.0
        } else {
            0.0
        };

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>14.1}",
            format!("{rows}x{cols}"),
            torus_ms,
            plane_ms,
            throughput
        );
    }
}
