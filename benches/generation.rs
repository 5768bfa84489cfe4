//! Generation time per graph backend.
//!
//! The matrix backend pays for growing its matrix one vertex at a time, so
//! it falls behind the other two quickly as the grid grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use maze_graphs::generators::recur_back::RecurBackGenerator;
use maze_graphs::generators::MazeGenerator;
use maze_graphs::graphs::GraphKind;
use maze_graphs::maze::Maze;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recur_back_generation");

    for size in [8usize, 16, 32].iter().copied() {
        for kind in GraphKind::ALL.iter().copied() {
            group.bench_with_input(BenchmarkId::new(kind.tag(), size), &size, |b, &size| {
                b.iter(|| {
                    let mut maze = Maze::new(size, size, kind);
                    RecurBackGenerator::with_seed(1).generate_maze(black_box(&mut maze));
                    maze
                });
            });
        }
    }

    group.finish();
}

/// Only the cell set-up, without carving.
fn bench_init_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("init_cells");

    for kind in GraphKind::ALL.iter().copied() {
        group.bench_function(kind.tag(), |b| {
            b.iter(|| {
                let mut maze = Maze::new(32, 32, kind);
                maze.init_cells(black_box(true));
                maze
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation, bench_init_cells);
criterion_main!(benches);
