//! Criterion benchmarks for Black-Scholes pricing, Greeks, and
//! implied-volatility extraction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use volkit_models::analytical::{BlackScholes, OptionType};
use volkit_models::calibration::ImpliedVolSolver;
use volkit_models::chain::{ChainEntry, ChainEvaluator};

/// Generate a synthetic chain of `n` strikes around the spot.
fn generate_chain(spot: f64, expiry: f64, rate: f64, n: usize) -> Vec<ChainEntry<f64>> {
    (0..n)
        .map(|i| {
            let strike = spot * (0.7 + 0.6 * i as f64 / n as f64);
            let vol = 0.18 + 0.1 * (i as f64 / n as f64 - 0.5).abs();
            let bs = BlackScholes::new(spot, strike, expiry, rate, vol).unwrap();
            ChainEntry {
                strike,
                market_price: bs.price(OptionType::Call),
            }
        })
        .collect()
}

fn bench_pricing(c: &mut Criterion) {
    let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.01, 0.2).unwrap();

    c.bench_function("price_call", |b| {
        b.iter(|| black_box(&bs).price(OptionType::Call))
    });

    c.bench_function("greeks_call", |b| {
        b.iter(|| black_box(&bs).greeks(OptionType::Call))
    });
}

fn bench_implied_vol(c: &mut Criterion) {
    let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.01, 0.2).unwrap();
    let price = bs.price(OptionType::Call);
    let solver = ImpliedVolSolver::with_defaults();

    c.bench_function("implied_vol_atm", |b| {
        b.iter(|| {
            solver
                .solve(100.0, 100.0, 1.0, 0.01, black_box(price), OptionType::Call)
                .unwrap()
        })
    });
}

fn bench_chain_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_evaluation");

    for size in [16, 128, 1024] {
        let entries = generate_chain(100.0, 1.0, 0.01, size);
        let evaluator = ChainEvaluator::new(100.0, 1.0, 0.01, OptionType::Call);

        group.bench_with_input(BenchmarkId::new("evaluate", size), &entries, |b, entries| {
            b.iter(|| evaluator.evaluate(black_box(entries)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pricing,
    bench_implied_vol,
    bench_chain_evaluation
);
criterion_main!(benches);
