//! Benchmark for riskcore analytics throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use riskcore::indicators::{moving_average, rsi};
use riskcore::metrics::calculate_all_metrics;
use riskcore::RiskAnalyzer;

/// Generate a positive oscillating price path.
fn generate_prices(n: usize, phase: f64) -> Vec<f64> {
    let mut prices = vec![100.0; n];
    for i in 1..n {
        let change = (i as f64 * 0.1 + phase).sin() * 0.01 + 0.0002;
        prices[i] = prices[i - 1] * (1.0 + change);
    }
    prices
}

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");

    for size in [1000, 5000, 10000, 50000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let prices = generate_prices(size, 0.0);

            b.iter(|| {
                let result = moving_average(black_box(&prices), black_box(20));
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsi");

    for size in [1000, 5000, 10000, 50000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let prices = generate_prices(size, 0.0);

            b.iter(|| {
                let result = rsi(black_box(&prices), black_box(14));
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_all_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_all_metrics");

    for size in [252, 2520, 25200].iter() {
        group.bench_with_input(BenchmarkId::new("observations", size), size, |b, &size| {
            let asset = generate_prices(size, 0.5);
            let market = generate_prices(size, 0.0);

            b.iter(|| {
                let result = calculate_all_metrics(black_box(&asset), black_box(&market));
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let analyzer = RiskAnalyzer::default();
    let market = generate_prices(2520, 0.0);
    let assets: Vec<Vec<f64>> = (0..64).map(|i| generate_prices(2520, i as f64 * 0.1)).collect();

    c.bench_function("analyze_batch_64x2520", |b| {
        b.iter(|| black_box(analyzer.analyze_batch(black_box(&assets), black_box(&market))))
    });
}

criterion_group!(benches, bench_moving_average, bench_rsi, bench_all_metrics, bench_batch);
criterion_main!(benches);
