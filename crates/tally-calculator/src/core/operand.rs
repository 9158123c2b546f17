//! Operand tokens, parsing and result stringification

use serde::{Deserialize, Serialize};

use crate::core::CalcError;

/// A single input token appended to the current operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Decimal digit `0`-`9`
    Digit(u8),
    /// The decimal point
    Point,
}

impl Token {
    /// The decimal point character used in operand strings
    pub const POINT: char = '.';

    /// Returns the character this token appends, or `None` for an
    /// out-of-range digit
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Point => Some(Self::POINT),
        }
    }
}

impl TryFrom<char> for Token {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            Self::POINT => Ok(Self::Point),
            '0'..='9' => Ok(Self::Digit(c as u8 - b'0')),
            other => Err(CalcError::InvalidToken(other)),
        }
    }
}

/// Parses the leading number of an operand string.
///
/// Accepts optional leading whitespace, an optional sign, then either
/// `Infinity` or a run of digits containing at most one point and at least
/// one digit. Anything after the number is ignored. Exponent notation is not
/// recognized. Returns `None` when no number can be read.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let (negative, rest) = match s.chars().next() {
        Some('-') => (true, &s[1..]),
        Some('+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = if rest.starts_with("Infinity") {
        f64::INFINITY
    } else {
        let mut end = 0;
        let mut digits = 0;
        let mut seen_point = false;
        for (i, c) in rest.char_indices() {
            match c {
                '0'..='9' => {
                    digits += 1;
                    end = i + 1;
                }
                Token::POINT if !seen_point => {
                    seen_point = true;
                    end = i + 1;
                }
                _ => break,
            }
        }
        if digits == 0 {
            return None;
        }
        rest[..end].parse::<f64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Turns an evaluation result back into an operand string.
///
/// Finite values use the shortest decimal that round-trips and never use
/// exponent notation; negative zero prints as `0`. Non-finite values become
/// `Infinity`, `-Infinity` or `NaN`.
#[must_use]
pub fn stringify_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
