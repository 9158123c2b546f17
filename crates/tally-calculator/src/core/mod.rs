//! Core calculator module

mod engine;
mod event;
pub mod format;
mod operand;
mod operations;

pub use engine::{Calculator, CalculatorState, Phase};
pub use event::{reduce, CalcEvent};
pub use format::{format_display, DisplayText, NumberFormat};
pub use operand::{parse_operand, stringify_result, Token};
pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator input translation
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while translating raw input into typed calculator input.
///
/// The engine operations themselves never fail: an invalid parse or a
/// duplicate decimal point is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Character is neither a decimal digit nor the decimal point
    #[error("Invalid input token: {0:?}")]
    InvalidToken(char),
    /// Operator symbol not recognized
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
    /// Number format locale tag not recognized
    #[error("Unknown locale: {0:?}")]
    UnknownLocale(String),
    /// Key name has no keypad binding
    #[error("Unbound key: {0:?}")]
    UnknownKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_invalid_token() {
        let err = CalcError::InvalidToken('a');
        assert_eq!(format!("{err}"), "Invalid input token: 'a'");
    }

    #[test]
    fn test_calc_error_display_unknown_operator() {
        let err = CalcError::UnknownOperator("%".into());
        assert_eq!(format!("{err}"), "Unknown operator: \"%\"");
    }

    #[test]
    fn test_calc_error_display_unknown_locale() {
        let err = CalcError::UnknownLocale("xx".into());
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::UnknownKey("F1".into()));
        assert!(err.to_string().contains("F1"));
    }
}
