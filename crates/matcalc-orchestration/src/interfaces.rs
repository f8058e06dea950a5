//! Orchestration interfaces.

use std::time::Duration;

use matcalc_core::matrix::Matrix;
use matcalc_core::product::MatError;

/// Result of a single multiplication run.
#[derive(Debug, Clone)]
pub struct ProductResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed product or a structured error.
    pub outcome: Result<Matrix, MatError>,
    /// Computation duration.
    pub duration: Duration,
}

impl ProductResult {
    /// The product, if this run succeeded.
    #[must_use]
    pub fn value(&self) -> Option<&Matrix> {
        self.outcome.as_ref().ok()
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a successful product.
    fn present_result(&self, algorithm: &str, result: &Matrix, duration: Duration, details: bool);

    /// Present a comparison over several runs.
    fn present_comparison(&self, results: &[ProductResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_result_value() {
        let ok = ProductResult {
            algorithm: "Strassen".into(),
            outcome: Ok(Matrix::identity(2)),
            duration: Duration::from_millis(5),
        };
        assert!(ok.value().is_some());

        let err = ProductResult {
            algorithm: "Naive".into(),
            outcome: Err(MatError::Cancelled),
            duration: Duration::from_millis(1),
        };
        assert!(err.value().is_none());
    }
}
