//! Error handling and exit codes.

use matcalc_core::constants::exit_codes;
use matcalc_core::product::MatError;

/// Handle a calculation error and return the appropriate exit code.
pub fn handle_error(err: &MatError) -> i32 {
    match err {
        MatError::Calculation(_) | MatError::InvalidInput(_) => exit_codes::ERROR_GENERIC,
        MatError::DimensionMismatch(_, _) => exit_codes::ERROR_DIMENSION,
        MatError::Config(_) => exit_codes::ERROR_CONFIG,
        MatError::Cancelled => exit_codes::ERROR_CANCELED,
        MatError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        MatError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcalc_core::sizing::Dims;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&MatError::Cancelled), 130);
        assert_eq!(
            handle_error(&MatError::DimensionMismatch(
                Dims::new(2, 3),
                Dims::new(2, 3)
            )),
            2
        );
        assert_eq!(handle_error(&MatError::Mismatch), 3);
        assert_eq!(handle_error(&MatError::Config("bad".into())), 4);
        assert_eq!(handle_error(&MatError::Timeout("5m".into())), 5);
        assert_eq!(handle_error(&MatError::InvalidInput("x".into())), 1);
    }
}
