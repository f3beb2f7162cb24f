//! Criterion benchmarks for the partition search.
//!
//! Uses synthetic rosters with uniformly drawn attributes to measure cost
//! evaluation and full search throughput independent of any real data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use team_balance::cost::{BalanceCost, CostModel};
use team_balance::roster::Player;
use team_balance::search::{SearchConfig, SearchRunner};

fn synthetic_roster(n: usize) -> Vec<Player> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    (0..n)
        .map(|i| {
            Player::new(
                format!("p{i}"),
                rng.random_range(0..=20) as f64,
                rng.random_range(0..=20) as f64,
                rng.random_range(0..=20) as f64,
                rng.random_range(0..=20) as f64,
            )
        })
        .collect()
}

fn bench_cost_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_eval");

    for &(team_count, team_size) in &[(3usize, 6usize), (3, 12), (5, 10)] {
        let roster = synthetic_roster(team_count * team_size);
        let teams: Vec<&[Player]> = roster.chunks_exact(team_size).collect();
        group.bench_with_input(
            BenchmarkId::new(format!("{team_count}x{team_size}"), team_count * team_size),
            &teams,
            |b, teams| b.iter(|| black_box(BalanceCost.cost(black_box(teams)))),
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let roster = synthetic_roster(18);
    for &iterations in &[1_000usize, 10_000] {
        let config = SearchConfig::default()
            .with_iterations(iterations)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = SearchRunner::run(black_box(&roster), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_cost_eval, bench_search);
criterion_main!(benches);
