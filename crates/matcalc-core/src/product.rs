//! Multiplier traits and the `MatrixProduct` pipeline decorator.
//!
//! `Multiplier` is the public trait consumed by orchestration; it works on
//! rectangular matrices. `CoreMultiplier` is the internal trait implemented
//! by the engines; it only ever sees padded power-of-two square buffers.
//! `MatrixProduct` is the decorator that bridges the two: it validates
//! dimensions, pads, dispatches, and trims.

use std::sync::Arc;

use crate::matrix::{Matrix, SquareMatrix};
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::sizing::{self, Dims};

/// Error type for matrix-product calculations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MatError {
    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Malformed input (bad token, wrong element count, zero dimension).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The operand shapes do not admit a product.
    #[error(
        "cannot multiply a {0} matrix by a {1} matrix: \
         the column count of the first operand must equal the row count of the second"
    )]
    DimensionMismatch(Dims, Dims),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Calculation was cancelled.
    #[error("calculation cancelled")]
    Cancelled,

    /// Calculation timed out.
    #[error("calculation timed out after {0}")]
    Timeout(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

/// Public trait for matrix multipliers, consumed by orchestration.
pub trait Multiplier: Send + Sync {
    /// Compute `a * b` with the given options.
    fn multiply(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        a: &Matrix,
        b: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, MatError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Internal trait for engine implementations.
///
/// Both operands always share the same power-of-two side; only the sizing
/// module ever produces buffers for this trait, so the precondition is
/// carried by `debug_assert!`s instead of runtime checks.
pub trait CoreMultiplier: Send + Sync {
    /// Multiply two padded square buffers of equal power-of-two side.
    fn multiply_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        a: &SquareMatrix,
        b: &SquareMatrix,
        opts: &Options,
    ) -> Result<SquareMatrix, MatError>;

    /// Get the name of this engine.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreMultiplier` with validation, padding,
/// and trimming.
pub struct MatrixProduct {
    inner: Arc<dyn CoreMultiplier>,
}

impl MatrixProduct {
    /// Create a new `MatrixProduct` wrapping the given engine.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreMultiplier>) -> Self {
        Self { inner }
    }
}

impl Multiplier for MatrixProduct {
    fn multiply(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        a: &Matrix,
        b: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, MatError> {
        let (left, right) = (a.dims(), b.dims());
        left.check_compatible(right)?;

        // Fast path: a 1x1 product needs no padding or recursion.
        if left.rows == 1 && left.cols == 1 && right.cols == 1 {
            observer.on_progress(&ProgressUpdate::done(calc_index, "FastPath"));
            let mut c = Matrix::zeroed(1, 1);
            c.set(0, 0, a.get(0, 0) * b.get(0, 0));
            return Ok(c);
        }

        // Check cancellation before allocating the padded operands
        cancel.check_cancelled()?;

        let side = sizing::padded_side(left, right);
        let padded_a = sizing::pad(a, side);
        let padded_b = sizing::pad(b, side);

        let product =
            self.inner
                .multiply_core(cancel, observer, calc_index, &padded_a, &padded_b, opts)?;

        // Only the top-left rows_a x cols_b block of the padded product is
        // the true result; the margins hold zero contributions.
        Ok(sizing::trim(product, left.rows, right.cols))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::NaiveMultiplier;
    use crate::observers::NoOpObserver;
    use crate::strassen::StrassenMultiplier;

    fn multiply_with(core: Arc<dyn CoreMultiplier>, a: &Matrix, b: &Matrix) -> Matrix {
        let calc = MatrixProduct::new(core);
        let cancel = CancellationToken::new();
        let observer = NoOpObserver::new();
        let opts = Options::default();
        calc.multiply(&cancel, &observer, 0, a, b, &opts).unwrap()
    }

    #[test]
    fn dimension_mismatch_is_reported() {
        let calc = MatrixProduct::new(Arc::new(StrassenMultiplier::new()));
        let a = Matrix::zeroed(2, 3);
        let b = Matrix::zeroed(2, 3);
        let cancel = CancellationToken::new();
        let observer = NoOpObserver::new();
        let opts = Options::default();
        let result = calc.multiply(&cancel, &observer, 0, &a, &b, &opts);
        assert!(matches!(result, Err(MatError::DimensionMismatch(_, _))));
    }

    #[test]
    fn fast_path_scalar_product() {
        let a = Matrix::from_vec(1, 1, vec![6]).unwrap();
        let b = Matrix::from_vec(1, 1, vec![7]).unwrap();
        let c = multiply_with(Arc::new(StrassenMultiplier::new()), &a, &b);
        assert_eq!(c.get(0, 0), 42);
    }

    #[test]
    fn rectangular_product_via_padding() {
        // The worked example from the original program:
        // |1 2 3|     |4|   |35|
        // |4 5 6|  x  |5| = |83|
        //             |7|
        let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = Matrix::from_vec(3, 1, vec![4, 5, 7]).unwrap();
        let c = multiply_with(Arc::new(StrassenMultiplier::new()), &a, &b);
        assert_eq!(c.dims(), Dims::new(2, 1));
        assert_eq!(c.get(0, 0), 35);
        assert_eq!(c.get(1, 0), 83);
    }

    #[test]
    fn ones_column_product() {
        let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = Matrix::from_vec(3, 1, vec![1, 1, 1]).unwrap();
        let c = multiply_with(Arc::new(StrassenMultiplier::new()), &a, &b);
        assert_eq!(c.get(0, 0), 6);
        assert_eq!(c.get(1, 0), 15);
    }

    #[test]
    fn both_engines_agree_through_decorator() {
        let a = Matrix::from_vec(3, 4, (1..=12).collect()).unwrap();
        let b = Matrix::from_vec(4, 2, (1..=8).map(|v| v * 3 - 5).collect()).unwrap();
        let strassen = multiply_with(Arc::new(StrassenMultiplier::new()), &a, &b);
        let naive = multiply_with(Arc::new(NaiveMultiplier::new()), &a, &b);
        assert_eq!(strassen, naive);
    }

    #[test]
    fn cancelled_before_start() {
        let calc = MatrixProduct::new(Arc::new(StrassenMultiplier::new()));
        let a = Matrix::zeroed(4, 4);
        let b = Matrix::zeroed(4, 4);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let observer = NoOpObserver::new();
        let opts = Options::default();
        let result = calc.multiply(&cancel, &observer, 0, &a, &b, &opts);
        assert!(matches!(result, Err(MatError::Cancelled)));
    }

    #[test]
    fn mat_error_display() {
        let err = MatError::Calculation("test".into());
        assert_eq!(err.to_string(), "calculation error: test");

        let err = MatError::Cancelled;
        assert_eq!(err.to_string(), "calculation cancelled");

        let err = MatError::DimensionMismatch(Dims::new(2, 3), Dims::new(2, 3));
        assert!(err.to_string().contains("2x3"));
    }
}
