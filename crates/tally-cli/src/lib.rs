//! Tally CLI Library
//!
//! Terminal front-end for the tally calculator: an interactive raw-mode
//! screen and a headless key-script mode sharing one binding.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod script;
pub mod terminal;

pub use commands::{Cli, ColorArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{DisplayPrinter, OutputFormat};
pub use script::{run_script, ScriptDriver, ScriptRun, ScriptStep};
pub use terminal::{map_key, render_screen, run_interactive, KeyInput, TerminalSink};
