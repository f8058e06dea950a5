//! Property-based tests for the product engines.
//!
//! These exercise the `CoreMultiplier` trait directly (without the
//! `MatrixProduct` decorator) on square power-of-two buffers, and the
//! sizing layer on rectangular shapes.

use proptest::prelude::*;

use matcalc_core::blocks::{add, sub};
use matcalc_core::matrix::{Matrix, SquareMatrix};
use matcalc_core::naive::NaiveMultiplier;
use matcalc_core::observers::NoOpObserver;
use matcalc_core::options::Options;
use matcalc_core::product::CoreMultiplier;
use matcalc_core::progress::CancellationToken;
use matcalc_core::sizing::{self, Dims};
use matcalc_core::strassen::StrassenMultiplier;

fn multiply_core(algo: &dyn CoreMultiplier, a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let opts = Options::default();
    algo.multiply_core(&cancel, &observer, 0, a, b, &opts)
        .unwrap()
}

/// Direct product definition over rectangular matrices, used as the oracle.
fn reference_product(a: &Matrix, b: &Matrix) -> Matrix {
    let mut c = Matrix::zeroed(a.rows(), b.cols());
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut acc = 0i64;
            for k in 0..a.cols() {
                acc += a.get(i, k) * b.get(k, j);
            }
            c.set(i, j, acc);
        }
    }
    c
}

/// Strategy: a rectangular matrix with the given shape.
fn rect_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-1000i64..1000, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Strassen agrees with the naive engine for every power-of-two side.
    #[test]
    fn strassen_equals_naive(
        exp in 0usize..4,
        data_a in prop::collection::vec(-1000i64..1000, 64),
        data_b in prop::collection::vec(-1000i64..1000, 64),
    ) {
        let side = 1 << exp;
        let a = SquareMatrix::from_vec(side, data_a[..side * side].to_vec()).unwrap();
        let b = SquareMatrix::from_vec(side, data_b[..side * side].to_vec()).unwrap();

        let strassen = StrassenMultiplier::new();
        let naive = NaiveMultiplier::new();
        prop_assert_eq!(
            multiply_core(&strassen, &a, &b),
            multiply_core(&naive, &a, &b),
            "Strassen != Naive at side {}", side
        );
    }

    /// Padding is transparent: pad -> multiply -> trim equals the direct
    /// rectangular product for random compatible shapes.
    #[test]
    fn padding_transparency(
        rows_a in 1usize..9,
        inner in 1usize..9,
        cols_b in 1usize..9,
        data_a in prop::collection::vec(-500i64..500, 64),
        data_b in prop::collection::vec(-500i64..500, 64),
    ) {
        let a = Matrix::from_vec(rows_a, inner, data_a[..rows_a * inner].to_vec()).unwrap();
        let b = Matrix::from_vec(inner, cols_b, data_b[..inner * cols_b].to_vec()).unwrap();

        let side = sizing::padded_side(a.dims(), b.dims());
        prop_assert!(side.is_power_of_two());

        let padded_a = sizing::pad(&a, side);
        let padded_b = sizing::pad(&b, side);
        let strassen = StrassenMultiplier::new();
        let product = multiply_core(&strassen, &padded_a, &padded_b);
        let trimmed = sizing::trim(product, rows_a, cols_b);

        prop_assert_eq!(trimmed, reference_product(&a, &b));
    }

    /// add then sub round-trips to the first operand.
    #[test]
    fn add_sub_round_trip(
        exp in 0usize..4,
        data in prop::collection::vec(-10_000i64..10_000, 128),
    ) {
        let side = 1 << exp;
        let a = SquareMatrix::from_vec(side, data[..side * side].to_vec()).unwrap();
        let b = SquareMatrix::from_vec(side, data[64..64 + side * side].to_vec()).unwrap();
        prop_assert_eq!(sub(&add(&a, &b), &b), a);
    }

    /// The padded side covers every dimension and is minimal.
    #[test]
    fn padded_side_is_minimal_cover(
        rows_a in 1usize..100,
        inner in 1usize..100,
        cols_b in 1usize..100,
    ) {
        let side = sizing::padded_side(Dims::new(rows_a, inner), Dims::new(inner, cols_b));
        let largest = rows_a.max(inner).max(cols_b);
        prop_assert!(side >= largest);
        prop_assert!(side.is_power_of_two());
        prop_assert!(side / 2 < largest || side == 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Multiplying by identity returns the operand unchanged.
    #[test]
    fn identity_law(m in rect_matrix(4, 4)) {
        let id = Matrix::identity(4);
        let side = sizing::padded_side(id.dims(), m.dims());
        let strassen = StrassenMultiplier::new();

        let left = sizing::trim(
            multiply_core(&strassen, &sizing::pad(&id, side), &sizing::pad(&m, side)),
            4,
            4,
        );
        prop_assert_eq!(&left, &m);

        let right = sizing::trim(
            multiply_core(&strassen, &sizing::pad(&m, side), &sizing::pad(&id, side)),
            4,
            4,
        );
        prop_assert_eq!(&right, &m);
    }

    /// Multiplying by a zero matrix yields a zero matrix.
    #[test]
    fn zero_law(m in rect_matrix(8, 8)) {
        let zero = Matrix::zeroed(8, 8);
        let strassen = StrassenMultiplier::new();
        let product = multiply_core(
            &strassen,
            &sizing::pad(&m, 8),
            &sizing::pad(&zero, 8),
        );
        prop_assert_eq!(sizing::trim(product, 8, 8), zero);
    }
}
