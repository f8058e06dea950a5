//! Memory budget estimation and validation.

use crate::sizing::{self, Dims};

/// Memory estimate for a matrix-product computation.
#[derive(Debug, Clone)]
pub struct MemoryEstimate {
    /// Padded side the recursion will run on.
    pub padded_side: usize,
    /// Bytes for the two padded operands and the padded result.
    pub resident_bytes: usize,
    /// Estimated bytes for transient recursion buffers.
    pub temp_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory usage for multiplying matrices of the given shapes.
    #[must_use]
    pub fn estimate(a: Dims, b: Dims) -> Self {
        let side = sizing::padded_side(a, b);
        let buffer_bytes = side * side * std::mem::size_of::<i64>();

        // Two padded operands plus the padded result stay resident for
        // the whole computation.
        let resident_bytes = 3 * buffer_bytes;

        // A recursion frame at side n holds quadrants, operand pairs,
        // seven sub-products, and four result quadrants, all of side n/2.
        // Summed over the levels of one active path that is a geometric
        // series bounded by a small multiple of the root buffer.
        let temp_bytes = 11 * buffer_bytes;

        Self {
            padded_side: side,
            resident_bytes,
            temp_bytes,
            total_bytes: resident_bytes + temp_bytes,
        }
    }

    /// Check if the computation fits within the given memory limit
    /// (0 = unlimited).
    #[must_use]
    pub fn fits_in(&self, limit: usize) -> bool {
        limit == 0 || self.total_bytes <= limit
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// # Errors
///
/// Returns an error string if the format is invalid or the number cannot
/// be parsed.
pub fn parse_memory_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit: {e}"))?;
    Ok(value * multiplier)
}
