//! Strassen's divide-and-conquer multiplication.
//!
//! Each recursion level halves the side and trades the eighth block
//! multiplication for extra additions, turning the recurrence into
//! T(n) = 7 T(n/2) + O(n^2) and the exponent into log2(7).
//!
//! The seven sub-products of a level are mutually independent: above
//! `parallel_threshold` they run as a rayon fork-join, each branch owning
//! its operand pair exclusively, joined before the combine step.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::blocks::{add, combine, split, sub};
use crate::constants::STRASSEN_PRODUCTS;
use crate::matrix::SquareMatrix;
use crate::naive::naive_square_product;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::product::{CoreMultiplier, MatError};
use crate::progress::{CancellationToken, ProgressUpdate};

/// Strassen multiplier over padded square buffers.
///
/// # Example
/// ```
/// use matcalc_core::matrix::SquareMatrix;
/// use matcalc_core::observers::NoOpObserver;
/// use matcalc_core::options::Options;
/// use matcalc_core::product::CoreMultiplier;
/// use matcalc_core::progress::CancellationToken;
/// use matcalc_core::strassen::StrassenMultiplier;
///
/// let calc = StrassenMultiplier::new();
/// let cancel = CancellationToken::new();
/// let observer = NoOpObserver::new();
/// let opts = Options::default();
/// let a = SquareMatrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
/// let b = SquareMatrix::from_vec(2, vec![5, 6, 7, 8]).unwrap();
/// let c = calc.multiply_core(&cancel, &observer, 0, &a, &b, &opts).unwrap();
/// assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
/// ```
pub struct StrassenMultiplier;

impl StrassenMultiplier {
    /// Create a new `StrassenMultiplier`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// One recursion frame.
    ///
    /// `on_product` is only supplied at the root, where the seven
    /// top-level sub-products drive the progress fraction; deeper frames
    /// recurse silently.
    fn recurse(
        a: &SquareMatrix,
        b: &SquareMatrix,
        cancel: &CancellationToken,
        opts: &Options,
        on_product: Option<&(dyn Fn() + Sync)>,
    ) -> Result<SquareMatrix, MatError> {
        // Cancellation checkpoint at the top of every frame
        cancel.check_cancelled()?;

        let n = a.side();
        debug_assert_eq!(n, b.side());
        debug_assert!(n.is_power_of_two());

        if n <= opts.base_threshold {
            return Ok(naive_square_product(a, b));
        }

        let qa = split(a);
        let qb = split(b);

        // The seven operand pairs of the Strassen formula. Every pair is
        // a fresh owned buffer, so each recursive branch has exclusive
        // ownership of everything it touches.
        let pairs: Vec<(SquareMatrix, SquareMatrix)> = vec![
            (qa.tl.clone(), sub(&qb.tr, &qb.br)), // p1 = a11 (b12 - b22)
            (add(&qa.tl, &qa.tr), qb.br.clone()), // p2 = (a11 + a12) b22
            (add(&qa.bl, &qa.br), qb.tl.clone()), // p3 = (a21 + a22) b11
            (qa.br.clone(), sub(&qb.bl, &qb.tl)), // p4 = a22 (b21 - b11)
            (add(&qa.tl, &qa.br), add(&qb.tl, &qb.br)), // p5 = (a11 + a22)(b11 + b22)
            (sub(&qa.tr, &qa.br), add(&qb.bl, &qb.br)), // p6 = (a12 - a22)(b21 + b22)
            (sub(&qa.tl, &qa.bl), add(&qb.tl, &qb.tr)), // p7 = (a11 - a21)(b11 + b12)
        ];
        drop((qa, qb));

        let step = |(lhs, rhs): (SquareMatrix, SquareMatrix)| {
            let product = Self::recurse(&lhs, &rhs, cancel, opts, None)?;
            if let Some(report) = on_product {
                report();
            }
            Ok(product)
        };

        let products: Vec<SquareMatrix> = if n >= opts.parallel_threshold {
            use rayon::prelude::*;
            pairs
                .into_par_iter()
                .map(step)
                .collect::<Result<_, MatError>>()?
        } else {
            pairs
                .into_iter()
                .map(step)
                .collect::<Result<_, MatError>>()?
        };

        let [p1, p2, p3, p4, p5, p6, p7]: [SquareMatrix; 7] = products
            .try_into()
            .map_err(|_| MatError::Calculation("expected seven sub-products".into()))?;

        let c11 = add(&sub(&add(&p5, &p4), &p2), &p6);
        let c12 = add(&p1, &p2);
        let c21 = add(&p3, &p4);
        let c22 = sub(&sub(&add(&p5, &p1), &p3), &p7);

        // Everything allocated in this frame except the combined result
        // is dropped on return.
        Ok(combine(c11, c12, c21, c22))
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for StrassenMultiplier {
    #[allow(clippy::cast_precision_loss)]
    fn multiply_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        a: &SquareMatrix,
        b: &SquareMatrix,
        opts: &Options,
    ) -> Result<SquareMatrix, MatError> {
        let frozen = observer.freeze();
        let completed = AtomicU64::new(0);

        // Called once per finished root-level sub-product
        let report = || {
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            let progress = done as f64 / STRASSEN_PRODUCTS as f64;
            if frozen.should_report(progress) {
                frozen.update(progress);
                observer.on_progress(&ProgressUpdate::new(
                    calc_index,
                    "Strassen",
                    progress,
                    done,
                    STRASSEN_PRODUCTS,
                ));
            }
        };

        let result = Self::recurse(a, b, cancel, opts, Some(&report))?;
        observer.on_progress(&ProgressUpdate::done(calc_index, "Strassen"));
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}
