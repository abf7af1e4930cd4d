//! modpack - packages the OukaroManager KernelSU module into a timestamped
//! ZIP archive.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use modpack_core::PackConfig;
use output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match run(&cli, &*formatter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = PackConfig::default();
    formatter.format_start();

    if cli.clean {
        commands::clean::execute(&config.output_dir, formatter)?;
    }
    commands::build::execute(&config, formatter)
}
