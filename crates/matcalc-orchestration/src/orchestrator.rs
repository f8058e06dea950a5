//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::{Duration, Instant};

use matcalc_core::matrix::Matrix;
use matcalc_core::observer::ProgressObserver;
use matcalc_core::observers::NoOpObserver;
use matcalc_core::options::Options;
use matcalc_core::product::{MatError, Multiplier};
use matcalc_core::progress::CancellationToken;

use crate::interfaces::ProductResult;

/// Execute the product with all given multipliers.
pub fn execute_products(
    multipliers: &[Arc<dyn Multiplier>],
    a: &Matrix,
    b: &Matrix,
    opts: &Options,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
) -> Vec<ProductResult> {
    execute_products_with_observer(multipliers, a, b, opts, cancel, timeout, &NoOpObserver::new())
}

/// Execute the product with all given multipliers and a progress observer.
#[allow(clippy::too_many_arguments)]
pub fn execute_products_with_observer(
    multipliers: &[Arc<dyn Multiplier>],
    a: &Matrix,
    b: &Matrix,
    opts: &Options,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
    observer: &dyn ProgressObserver,
) -> Vec<ProductResult> {
    let start_time = Instant::now();
    tracing::debug!(
        count = multipliers.len(),
        operands = %format!("{} * {}", a.dims(), b.dims()),
        "dispatching multipliers"
    );

    if multipliers.len() == 1 {
        // Single multiplier: run directly
        let calc = &multipliers[0];
        let start = Instant::now();
        let outcome = calc.multiply(cancel, observer, 0, a, b, opts);
        return vec![ProductResult {
            algorithm: calc.name().to_string(),
            outcome,
            duration: start.elapsed(),
        }];
    }

    // Multiple multipliers: run in parallel using rayon
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    multipliers
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(i, calc)| {
            let start = Instant::now();

            // Deadline check before dispatch
            if let Some(timeout) = timeout {
                if start_time.elapsed() > timeout {
                    return ProductResult {
                        algorithm: calc.name().to_string(),
                        outcome: Err(MatError::Timeout(format!("{timeout:?}"))),
                        duration: start.elapsed(),
                    };
                }
            }

            let outcome = calc.multiply(cancel, observer, i, a, b, opts);
            ProductResult {
                algorithm: calc.name().to_string(),
                outcome,
                duration: start.elapsed(),
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[ProductResult]) -> Result<(), MatError> {
    let valid_results: Vec<&Matrix> = results.iter().filter_map(ProductResult::value).collect();

    if valid_results.is_empty() {
        return Err(MatError::Calculation("no valid results".into()));
    }

    // Compare all results to the first valid one
    let first = valid_results[0];
    for value in &valid_results[1..] {
        if *value != first {
            return Err(MatError::Mismatch);
        }
    }

    Ok(())
}
