//! Application configuration from CLI flags and environment.

use clap::Parser;

/// MatCalc-rs — exact matrix-product calculator using Strassen's algorithm.
#[derive(Parser, Debug)]
#[command(name = "matcalc", version, about)]
pub struct AppConfig {
    /// Input file with both operand matrices (stdin when omitted).
    #[arg(short, long, env = "MATCALC_INPUT")]
    pub input: Option<String>,

    /// Algorithm to use: strassen, naive, or all.
    #[arg(long, default_value = "strassen")]
    pub algo: String,

    /// Verbose output (full matrices, progress logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path for the product.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the product matrix).
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit the product as a JSON envelope.
    #[arg(long)]
    pub json: bool,

    /// Timeout duration (e.g., "5m", "1h").
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Side length at or below which the recursion uses the direct
    /// triple-loop product (0 = default, 1 = recurse to scalars).
    #[arg(long, default_value = "0")]
    pub base_threshold: usize,

    /// Side length at or above which the seven sub-products of a recursion
    /// level run in parallel (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_threshold: usize,

    /// Memory limit (e.g., "8G", "512M").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse timeout string into Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> std::time::Duration {
        parse_duration(&self.timeout).unwrap_or(std::time::Duration::from_secs(300))
    }
}

/// Parse a duration string like "5m", "1h", "30s".
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 3600))
    } else if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_formats() {
        assert_eq!(
            parse_duration("5m"),
            Some(std::time::Duration::from_secs(300))
        );
        assert_eq!(
            parse_duration("1h"),
            Some(std::time::Duration::from_secs(3600))
        );
        assert_eq!(
            parse_duration("30s"),
            Some(std::time::Duration::from_secs(30))
        );
    }

    #[test]
    fn parse_duration_ms() {
        assert_eq!(
            parse_duration("1ms"),
            Some(std::time::Duration::from_millis(1))
        );
        assert_eq!(
            parse_duration("500ms"),
            Some(std::time::Duration::from_millis(500))
        );
    }

    #[test]
    fn parse_duration_bare_seconds() {
        assert_eq!(
            parse_duration("42"),
            Some(std::time::Duration::from_secs(42))
        );
    }

    #[test]
    fn parse_duration_invalid() {
        assert_eq!(parse_duration("soon"), None);
    }
}
