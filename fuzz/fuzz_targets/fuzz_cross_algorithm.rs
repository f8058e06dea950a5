#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use matcalc_core::matrix::Matrix;
use matcalc_core::naive::NaiveMultiplier;
use matcalc_core::observers::NoOpObserver;
use matcalc_core::options::Options;
use matcalc_core::product::{MatrixProduct, Multiplier};
use matcalc_core::progress::CancellationToken;
use matcalc_core::strassen::StrassenMultiplier;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First three bytes pick the shape, capped at 8 per dimension for speed
    let rows_a = usize::from(data[0] % 8) + 1;
    let inner = usize::from(data[1] % 8) + 1;
    let cols_b = usize::from(data[2] % 8) + 1;

    let needed = rows_a * inner + inner * cols_b;
    let values = &data[3..];
    if values.len() < needed {
        return;
    }

    let data_a: Vec<i64> = values[..rows_a * inner]
        .iter()
        .map(|&v| i64::from(v) - 128)
        .collect();
    let data_b: Vec<i64> = values[rows_a * inner..needed]
        .iter()
        .map(|&v| i64::from(v) - 128)
        .collect();

    let a = Matrix::from_vec(rows_a, inner, data_a).unwrap();
    let b = Matrix::from_vec(inner, cols_b, data_b).unwrap();

    let strassen = MatrixProduct::new(Arc::new(StrassenMultiplier::new()));
    let naive = MatrixProduct::new(Arc::new(NaiveMultiplier::new()));
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let opts = Options::default().normalize();

    let lhs = strassen
        .multiply(&cancel, &observer, 0, &a, &b, &opts)
        .unwrap();
    let rhs = naive
        .multiply(&cancel, &observer, 0, &a, &b, &opts)
        .unwrap();
    assert_eq!(lhs, rhs);
});
