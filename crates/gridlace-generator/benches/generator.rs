//! Benchmarks for puzzle generation.
//!
//! Measures the full pipeline (grid fill, carving, and the solver
//! acceptance loop) at every supported board size. Each size runs against
//! three fixed seeds, so measurements are reproducible while still
//! covering generation paths with different rejection counts.
//!
//! Run with:
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use gridlace_core::{Difficulty, Geometry};
use gridlace_generator::{PuzzleGenerator, PuzzleSeed};
use gridlace_solver::PropagationSolver;

const SEEDS: [&str; 3] = [
    "7f3a9c0de2154b86fa6d31c58e07b9240cdd5a71e8f2693b04c1d6a5f38e7b92",
    "0b8e25f7c4a1d96338f0b5e2a7c41d8f6e93025bc7da418ef25b90c3617d4ae8",
    "d25c7e1f60b3a894471e2f8c0d5b6a39f8421c7e09d3b5a6e1f74c28903bd5c6",
];

fn bench_generator_size(c: &mut Criterion, name: &str, geometry: Geometry) {
    let solver = PropagationSolver::with_fundamental_techniques();
    let generator = PuzzleGenerator::new(&solver);
    let difficulty = Difficulty::default();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(BenchmarkId::new(name, format!("seed_{i}")), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(geometry, difficulty, seed),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_generator_4x4(c: &mut Criterion) {
    bench_generator_size(c, "generator_4x4", Geometry::SIZE_4);
}

fn bench_generator_6x6(c: &mut Criterion) {
    bench_generator_size(c, "generator_6x6", Geometry::SIZE_6);
}

fn bench_generator_9x9(c: &mut Criterion) {
    bench_generator_size(c, "generator_9x9", Geometry::SIZE_9);
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_4x4,
        bench_generator_6x6,
        bench_generator_9x9
);
criterion_main!(benches);
