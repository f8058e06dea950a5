//! Direct triple-loop multiplication.
//!
//! Serves three roles: the reference oracle for the Strassen engine, the
//! cross-validation partner in `--algo all` runs, and the crossover base
//! case when `base_threshold` is raised above 1.

use crate::matrix::SquareMatrix;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::product::{CoreMultiplier, MatError};
use crate::progress::{CancellationToken, ProgressUpdate};

/// Triple-loop product of two same-side square buffers (i, k, j order).
#[must_use]
pub fn naive_square_product(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    debug_assert_eq!(a.side(), b.side());
    let n = a.side();
    let mut c = SquareMatrix::zeroed(n);
    let av = a.as_slice();
    let bv = b.as_slice();
    let cv = c.as_mut_slice();
    for i in 0..n {
        for k in 0..n {
            let aik = av[i * n + k];
            // Padded operands are mostly zero outside the true block
            if aik == 0 {
                continue;
            }
            for j in 0..n {
                cv[i * n + j] += aik * bv[k * n + j];
            }
        }
    }
    c
}

/// O(n^3) multiplier over padded square buffers.
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for NaiveMultiplier {
    #[allow(clippy::cast_precision_loss)]
    fn multiply_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        a: &SquareMatrix,
        b: &SquareMatrix,
        _opts: &Options,
    ) -> Result<SquareMatrix, MatError> {
        debug_assert_eq!(a.side(), b.side());
        let n = a.side();
        let frozen = observer.freeze();

        let av = a.as_slice();
        let bv = b.as_slice();
        let mut c = SquareMatrix::zeroed(n);

        for i in 0..n {
            // Cancellation checkpoint per row band
            cancel.check_cancelled()?;

            for k in 0..n {
                let aik = av[i * n + k];
                if aik == 0 {
                    continue;
                }
                let cv = c.as_mut_slice();
                for j in 0..n {
                    cv[i * n + j] += aik * bv[k * n + j];
                }
            }

            let progress = (i + 1) as f64 / n as f64;
            if frozen.should_report(progress) {
                frozen.update(progress);
                observer.on_progress(&ProgressUpdate::new(
                    calc_index,
                    "Naive",
                    progress,
                    (i + 1) as u64,
                    n as u64,
                ));
            }
        }

        observer.on_progress(&ProgressUpdate::done(calc_index, "Naive"));
        Ok(c)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::NoOpObserver;

    fn multiply(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
        let calc = NaiveMultiplier::new();
        let cancel = CancellationToken::new();
        let observer = NoOpObserver::new();
        let opts = Options::default();
        calc.multiply_core(&cancel, &observer, 0, a, b, &opts)
            .unwrap()
    }

    #[test]
    fn scalar_product() {
        let a = SquareMatrix::scalar(6);
        let b = SquareMatrix::scalar(-7);
        assert_eq!(multiply(&a, &b).as_slice(), &[-42]);
    }

    #[test]
    fn two_by_two_known_product() {
        let a = SquareMatrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        let b = SquareMatrix::from_vec(2, vec![5, 6, 7, 8]).unwrap();
        let c = multiply(&a, &b);
        assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
    }

    #[test]
    fn zero_operand_gives_zero() {
        let a = SquareMatrix::from_vec(4, (1..=16).collect()).unwrap();
        let zero = SquareMatrix::zeroed(4);
        assert_eq!(multiply(&a, &zero), SquareMatrix::zeroed(4));
        assert_eq!(multiply(&zero, &a), SquareMatrix::zeroed(4));
    }

    #[test]
    fn free_function_matches_engine() {
        let a = SquareMatrix::from_vec(4, (0..16).map(|v| v - 7).collect()).unwrap();
        let b = SquareMatrix::from_vec(4, (0..16).map(|v| 3 * v + 1).collect()).unwrap();
        assert_eq!(naive_square_product(&a, &b), multiply(&a, &b));
    }

    #[test]
    fn cancellation_aborts() {
        let calc = NaiveMultiplier::new();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let observer = NoOpObserver::new();
        let opts = Options::default();
        let a = SquareMatrix::zeroed(4);
        let result = calc.multiply_core(&cancel, &observer, 0, &a, &a, &opts);
        assert!(matches!(result, Err(MatError::Cancelled)));
    }
}
