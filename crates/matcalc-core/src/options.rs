//! Calculation options and configuration.

use crate::constants::{DEFAULT_BASE_THRESHOLD, DEFAULT_PARALLEL_THRESHOLD};

/// Options for a matrix-product calculation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Side length at or below which the recursion uses the direct
    /// triple-loop product (1 = recurse to scalars).
    pub base_threshold: usize,
    /// Side length at or above which the seven sub-products of a
    /// recursion level run in parallel.
    pub parallel_threshold: usize,
    /// Memory limit in bytes (0 = unlimited).
    pub memory_limit: usize,
    /// Whether to show verbose output.
    pub verbose: bool,
    /// Whether to show detailed output.
    pub details: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_threshold: DEFAULT_BASE_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            memory_limit: 0,
            verbose: false,
            details: false,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.base_threshold == 0 {
            self.base_threshold = DEFAULT_BASE_THRESHOLD;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        self
    }
}
