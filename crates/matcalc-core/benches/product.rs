//! Criterion benchmarks for the product engines.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use matcalc_core::matrix::Matrix;
use matcalc_core::naive::NaiveMultiplier;
use matcalc_core::observers::NoOpObserver;
use matcalc_core::options::Options;
use matcalc_core::product::{MatrixProduct, Multiplier};
use matcalc_core::progress::CancellationToken;
use matcalc_core::strassen::StrassenMultiplier;

fn compute(calc: &dyn Multiplier, a: &Matrix, b: &Matrix) -> Matrix {
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let opts = Options::default().normalize();
    calc.multiply(&cancel, &observer, 0, a, b, &opts).unwrap()
}

#[allow(clippy::cast_possible_wrap)]
fn operand(n: usize, salt: i64) -> Matrix {
    let data = (0..n * n)
        .map(|v| (v as i64 * 37 + salt) % 101 - 50)
        .collect();
    Matrix::from_vec(n, n, data).unwrap()
}

fn bench_algorithms(c: &mut Criterion) {
    let strassen: Arc<dyn Multiplier> =
        Arc::new(MatrixProduct::new(Arc::new(StrassenMultiplier::new())));
    let naive: Arc<dyn Multiplier> = Arc::new(MatrixProduct::new(Arc::new(NaiveMultiplier::new())));

    let sides: Vec<usize> = vec![16, 64, 128, 256];

    let mut group = c.benchmark_group("Strassen");
    for &n in &sides {
        let (a, b) = (operand(n, 1), operand(n, 7));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| compute(strassen.as_ref(), &a, &b));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Naive");
    for &n in &sides {
        let (a, b) = (operand(n, 1), operand(n, 7));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| compute(naive.as_ref(), &a, &b));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
