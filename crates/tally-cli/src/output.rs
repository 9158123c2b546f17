//! Output formatting for script runs

use console::{style, Term};
use serde::{Deserialize, Serialize};
use tally_calculator::core::DisplayText;

use crate::error::CliResult;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct StepRecord<'a> {
    key: char,
    main: &'a str,
    secondary: &'a str,
}

/// Renders displays to stdout
#[derive(Debug)]
pub struct DisplayPrinter {
    term: Term,
    format: OutputFormat,
    /// Whether to use colors (text format only)
    pub use_color: bool,
}

impl DisplayPrinter {
    /// Create a printer writing to stdout
    #[must_use]
    pub fn new(format: OutputFormat, use_color: bool) -> Self {
        Self {
            term: Term::stdout(),
            format,
            use_color,
        }
    }

    /// Output format in use
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Renders the final display.
    ///
    /// Text puts the pending expression on its own line above the value,
    /// and leaves it out when nothing is pending.
    pub fn render_display(&self, display: &DisplayText) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(display)?),
            OutputFormat::Text => {
                let main = style(display.main.as_str())
                    .bold()
                    .force_styling(self.use_color);
                if display.secondary.is_empty() {
                    Ok(main.to_string())
                } else {
                    let secondary = style(display.secondary.as_str())
                        .dim()
                        .force_styling(self.use_color);
                    Ok(format!("{secondary}\n{main}"))
                }
            }
        }
    }

    /// Renders the display reached after one key of a script
    pub fn render_step(&self, key: char, display: &DisplayText) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&StepRecord {
                key,
                main: &display.main,
                secondary: &display.secondary,
            })?),
            OutputFormat::Text => {
                let key = style(key).cyan().force_styling(self.use_color);
                Ok(format!("{key}  {} | {}", display.secondary, display.main))
            }
        }
    }

    /// Writes one rendered block
    pub fn print(&self, text: &str) -> CliResult<()> {
        self.term.write_line(text)?;
        Ok(())
    }
}
