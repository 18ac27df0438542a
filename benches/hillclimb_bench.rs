//! Criterion benchmarks for u-hillclimb.
//!
//! Uses OneMax and a random knapsack instance to measure engine overhead
//! per run, plus raw neighborhood sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_hillclimb::hc::{HcConfig, HillClimbing, StochasticHillClimbing};
use u_hillclimb::neighbor::{bit_flip_neighbors, BitFlip};
use u_hillclimb::problems::Knapsack;

fn one_max(s: &Vec<u8>) -> f64 {
    s.iter().map(|&b| b as f64).sum()
}

// ===========================================================================
// Neighborhood sampling
// ===========================================================================

fn bench_bit_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_flip_neighbors");
    for &dim in &[20usize, 200, 2000] {
        let solution = vec![0u8; dim];
        let mut rng = StdRng::seed_from_u64(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, &dim| {
            b.iter(|| bit_flip_neighbors(black_box(&solution), dim.min(10), &mut rng))
        });
    }
    group.finish();
}

// ===========================================================================
// OneMax
// ===========================================================================

fn bench_one_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_max");
    for &dim in &[50usize, 200] {
        let initial = vec![0u8; dim];
        let config = HcConfig::default()
            .with_max_iterations(dim * 2)
            .with_seed(42);

        let mut steepest = HillClimbing::new(one_max, BitFlip, config.clone());
        group.bench_with_input(BenchmarkId::new("steepest", dim), &initial, |b, init| {
            b.iter(|| steepest.run(black_box(init)))
        });

        let mut stochastic = StochasticHillClimbing::new(one_max, BitFlip, config);
        group.bench_with_input(BenchmarkId::new("stochastic", dim), &initial, |b, init| {
            b.iter(|| stochastic.run(black_box(init)))
        });
    }
    group.finish();
}

// ===========================================================================
// Knapsack
// ===========================================================================

fn bench_knapsack(c: &mut Criterion) {
    let knapsack = Knapsack::generate(100, 7).expect("valid instance");
    let initial = vec![0u8; knapsack.dim()];
    let config = HcConfig::default().with_max_iterations(500).with_seed(42);
    let mut hc = HillClimbing::new(knapsack, BitFlip, config);

    c.bench_function("knapsack_100_steepest", |b| b.iter(|| hc.run(black_box(&initial))));
}

criterion_group!(benches, bench_bit_flip, bench_one_max, bench_knapsack);
criterion_main!(benches);
