//! Benchmarks for the weight engine.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rotor_engine::{EngineConfig, WeightEngine};
use rotor_primitives::{Date, PriceTable, Symbol};

/// Random-walk price table: one benchmark plus `n_sectors` sector columns.
fn random_table(n_dates: usize, n_sectors: usize) -> PriceTable {
    let mut rng = rand::thread_rng();
    let normal = Normal::new(0.0003, 0.01).unwrap();

    let symbols: Vec<Symbol> = std::iter::once(Symbol::new("SPY"))
        .chain((0..n_sectors).map(|i| Symbol::new(format!("SEC{i:02}"))))
        .collect();

    let mut values = Array2::zeros((n_dates, n_sectors + 1));
    for j in 0..=n_sectors {
        let mut price = 50.0 + rng.r#gen::<f64>() * 100.0;
        for i in 0..n_dates {
            price *= 1.0 + normal.sample(&mut rng);
            values[[i, j]] = price;
        }
    }

    let dates: Vec<Date> = (0..n_dates)
        .map(|i| Date::from_ymd_opt(2015, 1, 1).unwrap() + chrono::Duration::days(i as i64))
        .collect();

    PriceTable::new(dates, symbols, values).unwrap()
}

fn bench_compute_weights(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_weights");

    for n_dates in [756, 1512, 3024] {
        group.throughput(Throughput::Elements(n_dates as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_dates), &n_dates, |b, &n_dates| {
            let table = random_table(n_dates, 11);
            b.iter(|| {
                let mut engine = WeightEngine::new(
                    black_box(table.clone()),
                    "SPY",
                    EngineConfig::default(),
                )
                .unwrap();
                engine.weights().unwrap().len()
            });
        });
    }

    group.finish();
}

fn bench_full_backtest(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_backtest");

    for n_sectors in [11, 50] {
        group.bench_with_input(
            BenchmarkId::new("sectors", n_sectors),
            &n_sectors,
            |b, &n_sectors| {
                let table = random_table(1512, n_sectors);
                b.iter(|| {
                    let mut engine = WeightEngine::new(
                        black_box(table.clone()),
                        "SPY",
                        EngineConfig::default(),
                    )
                    .unwrap();
                    engine.results().unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute_weights, bench_full_backtest);
criterion_main!(benches);
