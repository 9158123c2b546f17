//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{CliConfig, ColorChoice, Verbosity};
use crate::error::CliResult;
use crate::output::OutputFormat;

/// Tally: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Key scripts: digits and `.` type, + - * / (or x × ÷ −) choose an \
                        operator, `=` evaluates, `<` deletes, `c` clears, spaces are skipped.")]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum)]
    pub color: Option<ColorArg>,

    /// YAML config file
    #[arg(long, value_name = "PATH", env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Separator preset (en, de, fr, de-ch, plain, ...)
    #[arg(long, value_name = "TAG")]
    pub locale: Option<String>,

    /// Run a key script instead of the interactive screen
    #[arg(short, long, value_name = "KEYS", allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// Print results as JSON
    #[arg(long, requires = "keys")]
    pub json: bool,

    /// Print the display after every key
    #[arg(long, requires = "keys")]
    pub trace: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long, conflicts_with = "keys")]
    pub show_config: bool,
}

impl Cli {
    /// Layers the configuration: defaults, then the config file, then flags
    pub fn resolve_config(&self) -> CliResult<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        if self.quiet || self.verbose > 0 {
            config.verbosity = Verbosity::from_flags(self.quiet, self.verbose);
        }
        if let Some(color) = self.color {
            config.color = color.into();
        }
        if let Some(locale) = &self.locale {
            // an explicit preset replaces separators from the file
            config = config.with_locale(locale.as_str()).with_number_format(None);
        }
        config.number_format()?;
        Ok(config)
    }

    /// Output format for script runs
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
