//! Tally: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! tally                              # Interactive screen
//! tally --keys "1234 * 2 ="          # Run a key script, print the result
//! tally --keys "3+4+" --trace        # Show the display after every key
//! tally --keys "1/3=" --json         # Machine-readable output
//! tally --locale de-ch --keys "12345"
//! ```

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tally::{
    logging, run_interactive, run_script, Cli, CliConfig, CliError, CliResult, DisplayPrinter,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init(&config)?;

    if cli.show_config {
        return run_show_config(&config);
    }
    match &cli.keys {
        Some(keys) => run_keys(&cli, &config, keys),
        None => {
            if !std::io::stdout().is_terminal() {
                return Err(CliError::invalid_argument(
                    "interactive mode needs a terminal; pass --keys to run a script",
                ));
            }
            run_interactive(config.number_format()?, config.color.should_color())
        }
    }
}

fn run_show_config(config: &CliConfig) -> CliResult<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn run_keys(cli: &Cli, config: &CliConfig, keys: &str) -> CliResult<()> {
    let run = run_script(keys, config.number_format()?)?;
    let printer = DisplayPrinter::new(cli.output_format(), config.color.should_color());

    if cli.trace {
        for step in &run.steps {
            printer.print(&printer.render_step(step.key, &step.display)?)?;
        }
    }
    // a trace already ends on the final display
    if !cli.trace || run.steps.is_empty() {
        printer.print(&printer.render_display(&run.display)?)?;
    }
    Ok(())
}
