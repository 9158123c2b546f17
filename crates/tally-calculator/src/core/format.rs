//! Display formatting

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Token};

/// The rendered pair written to the two display surfaces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    /// Formatted current operand
    pub main: String,
    /// Formatted previous operand and pending operator symbol, or empty
    pub secondary: String,
}

impl DisplayText {
    /// Creates a display pair
    #[must_use]
    pub fn new(main: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            secondary: secondary.into(),
        }
    }

    /// Returns true when both lines are blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.secondary.is_empty()
    }
}

/// Thousands grouping and decimal separator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Character inserted between digit groups of the integer part
    pub group_separator: char,
    /// Character rendered in place of the operand's decimal point
    pub decimal_separator: char,
    /// Digits per group; 0 disables grouping
    pub group_size: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::english()
    }
}

impl NumberFormat {
    /// English grouping: `1,234.5`
    #[must_use]
    pub const fn english() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
            group_size: 3,
        }
    }

    /// Ungrouped digits: `1234.5`
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
            group_size: 0,
        }
    }

    /// Looks up a preset by locale tag (case-insensitive, `_` or `-`)
    pub fn for_locale(tag: &str) -> CalcResult<Self> {
        let normalized = tag.trim().to_ascii_lowercase().replace('_', "-");
        let (group_separator, decimal_separator) = match normalized.as_str() {
            "en" | "en-us" | "en-gb" | "en-au" | "en-ca" => (',', '.'),
            "de" | "de-de" | "es" | "it" | "nl" | "pt-br" => ('.', ','),
            "fr" | "fr-fr" => ('\u{202f}', ','),
            "de-ch" => ('\'', '.'),
            "plain" => return Ok(Self::plain()),
            _ => return Err(CalcError::UnknownLocale(tag.to_string())),
        };
        Ok(Self {
            group_separator,
            decimal_separator,
            group_size: 3,
        })
    }

    /// Formats an operand string for display.
    ///
    /// The integer part is grouped when it is an optional `-` followed by
    /// digits and renders empty otherwise. A fractional part, when present,
    /// is appended verbatim after the decimal separator.
    #[must_use]
    pub fn format(&self, text: &str) -> String {
        let (integer, fraction) = match text.split_once(Token::POINT) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };

        let mut out = self.format_integer(integer).unwrap_or_default();
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    fn format_integer(&self, integer: &str) -> Option<String> {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };

        let mut out = String::with_capacity(sign.len() + digits.len() * 2);
        out.push_str(sign);
        let len = digits.len();
        for (i, c) in digits.chars().enumerate() {
            if self.group_size > 0 && i > 0 && (len - i) % self.group_size == 0 {
                out.push(self.group_separator);
            }
            out.push(c);
        }
        Some(out)
    }
}

/// Formats an operand string with English grouping
#[must_use]
pub fn format_display(text: &str) -> String {
    NumberFormat::english().format(text)
}
