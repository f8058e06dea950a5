//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use matcalc_core::matrix::Matrix;

/// Maximum rows shown in non-verbose mode before eliding.
const MAX_DISPLAY_ROWS: usize = 20;

/// Format a matrix as rows of space-separated values, one row per line.
#[must_use]
pub fn format_matrix(m: &Matrix) -> String {
    let mut out = String::new();
    for i in 0..m.rows() {
        let row: Vec<String> = m.row(i).iter().map(ToString::to_string).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Format a matrix for display, eliding rows when not verbose.
#[must_use]
pub fn format_result(m: &Matrix, verbose: bool) -> String {
    if verbose || m.rows() <= MAX_DISPLAY_ROWS {
        return format_matrix(m);
    }
    let mut out = String::new();
    for i in 0..MAX_DISPLAY_ROWS {
        let row: Vec<String> = m.row(i).iter().map(ToString::to_string).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out.push_str(&format!(
        "... ({} rows total, pass --verbose for all)\n",
        m.rows()
    ));
    out
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// JSON envelope for a computed product.
#[derive(Debug, Serialize)]
pub struct JsonProduct<'a> {
    pub algorithm: &'a str,
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<&'a [i64]>,
    pub duration_ms: f64,
}

impl<'a> JsonProduct<'a> {
    /// Build the envelope from a result matrix.
    #[must_use]
    pub fn new(algorithm: &'a str, m: &'a Matrix, duration: Duration) -> Self {
        Self {
            algorithm,
            rows: m.rows(),
            cols: m.cols(),
            data: (0..m.rows()).map(|i| m.row(i)).collect(),
            duration_ms: duration.as_secs_f64() * 1000.0,
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Write a result matrix to a file in the plain row-per-line format.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, m: &Matrix) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{}", format_matrix(m))?;
    Ok(())
}
