//! Headless key-script runs

use tally_calculator::binding::{KeypadAction, RecordingSink, UiBinding};
use tally_calculator::core::{DisplayText, NumberFormat};
use tally_calculator::driver::CalculatorDriver;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Driver over a binding with no screen attached
#[derive(Debug)]
pub struct ScriptDriver {
    binding: UiBinding<RecordingSink>,
}

impl Default for ScriptDriver {
    fn default() -> Self {
        Self::new(NumberFormat::english())
    }
}

impl ScriptDriver {
    /// Creates a driver rendering with `format`
    #[must_use]
    pub fn new(format: NumberFormat) -> Self {
        Self {
            binding: UiBinding::with_format(RecordingSink::new(), format),
        }
    }

    /// The display as last rendered
    #[must_use]
    pub fn display(&self) -> DisplayText {
        self.binding.sink().last().cloned().unwrap_or_default()
    }

    /// True when the last evaluation overflowed or divided by zero
    #[must_use]
    pub fn has_invalid_result(&self) -> bool {
        self.binding.has_invalid_result()
    }
}

impl CalculatorDriver for ScriptDriver {
    fn press(&mut self, action: KeypadAction) {
        self.binding.press(action);
    }

    fn main_text(&self) -> String {
        self.display().main
    }

    fn secondary_text(&self) -> String {
        self.display().secondary
    }
}

/// Display reached after one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    /// The key as typed
    pub key: char,
    /// Display after the key was applied
    pub display: DisplayText,
}

/// Outcome of a whole script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRun {
    /// One entry per non-blank key
    pub steps: Vec<ScriptStep>,
    /// Final display
    pub display: DisplayText,
    /// Whether the final value is infinite or NaN
    pub invalid: bool,
}

/// Runs every key of `keys`; blanks are skipped.
///
/// The whole script is checked before any key is applied, so an unbound key
/// fails the run without partial output.
pub fn run_script(keys: &str, format: NumberFormat) -> CliResult<ScriptRun> {
    let actions = keys
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(pos, c)| {
            KeypadAction::from_script_char(c)
                .map(|action| (c, action))
                .map_err(|e| CliError::invalid_argument(format!("--keys position {pos}: {e}")))
        })
        .collect::<CliResult<Vec<_>>>()?;

    let mut driver = ScriptDriver::new(format);
    let mut steps = Vec::with_capacity(actions.len());
    for (key, action) in actions {
        driver.press(action);
        steps.push(ScriptStep {
            key,
            display: driver.display(),
        });
    }
    debug!(keys = steps.len(), "script finished");

    Ok(ScriptRun {
        display: driver.display(),
        invalid: driver.has_invalid_result(),
        steps,
    })
}
