//! Constants for multiplication thresholds and configuration.

/// Default side length at or below which the recursion switches to the
/// direct triple-loop product. 1 means the recursion runs all the way
/// down to scalar multiplications.
pub const DEFAULT_BASE_THRESHOLD: usize = 1;

/// Default side length at or above which the seven sub-products of a
/// recursion level run in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 128;

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Number of recursive sub-products per Strassen recursion level.
pub const STRASSEN_PRODUCTS: u64 = 7;

/// Exit codes for the command-line driver.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Operand dimensions do not admit a product.
    pub const ERROR_DIMENSION: i32 = 2;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Computation timed out.
    pub const ERROR_TIMEOUT: i32 = 5;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_threshold_preserves_scalar_recursion() {
        // The reference behaviour recurses to 1x1 blocks.
        assert_eq!(DEFAULT_BASE_THRESHOLD, 1);
    }

    #[test]
    fn exit_codes_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_DIMENSION,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
            exit_codes::ERROR_TIMEOUT,
            exit_codes::ERROR_CANCELED,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
