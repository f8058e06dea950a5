//! CLI result presenter.

use std::time::Duration;

use matcalc_core::matrix::Matrix;
use matcalc_orchestration::interfaces::{ProductResult, ResultPresenter};

use crate::output::{format_duration, format_matrix, format_result};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, algorithm: &str, result: &Matrix, duration: Duration, details: bool) {
        if self.quiet {
            // Exactly the product, row per line
            print!("{}", format_matrix(result));
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("Product: {}", result.dims());
        println!("Duration: {}", format_duration(duration));

        if details {
            println!("Elements: {}", result.rows() * result.cols());
            let widest = result.as_slice().iter().map(|v| v.abs()).max().unwrap_or(0);
            println!("Largest magnitude: {widest}");
        }

        print!("{}", format_result(result, self.verbose));
    }

    fn present_comparison(&self, results: &[ProductResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
