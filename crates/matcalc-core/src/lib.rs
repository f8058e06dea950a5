//! # matcalc-core
//!
//! Core library for the MatCalc-rs exact matrix-product calculator.
//! Implements Strassen's divide-and-conquer multiplication and the naive
//! triple-loop reference over padded power-of-two buffers.

pub mod blocks;
pub mod constants;
pub mod matrix;
pub mod memory_budget;
pub mod naive;
pub mod observer;
pub mod observers;
pub mod options;
pub mod product;
pub mod progress;
pub mod registry;
pub mod sizing;
pub mod strassen;

// Re-exports
pub use constants::{exit_codes, DEFAULT_BASE_THRESHOLD, DEFAULT_PARALLEL_THRESHOLD};
pub use matrix::{Element, Matrix, SquareMatrix};
pub use observer::{FrozenObserver, ProgressObserver};
pub use options::Options;
pub use product::{CoreMultiplier, MatError, MatrixProduct, Multiplier};
pub use progress::{CancellationToken, ProgressUpdate};
pub use registry::{DefaultFactory, MultiplierFactory};
pub use sizing::{closest_power_of_two, Dims};

/// Compute `a * b` with the Strassen engine.
///
/// This is a convenience function for simple use cases. For advanced
/// configuration (progress, cancellation, thresholds), use the
/// `Multiplier` trait directly.
///
/// # Example
/// ```
/// use matcalc_core::Matrix;
///
/// let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let b = Matrix::from_vec(3, 1, vec![4, 5, 7]).unwrap();
/// let c = matcalc_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[35, 83]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    use observers::NoOpObserver;
    use std::sync::Arc;
    use strassen::StrassenMultiplier;

    let calc = MatrixProduct::new(Arc::new(StrassenMultiplier::new()));
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let opts = Options::default();
    calc.multiply(&cancel, &observer, 0, a, b, &opts)
}
