//! keenetic-dns-routes CLI
//!
//! Command-line interface for generating Keenetic DNS-Based Routes domain
//! lists from rule lists.

mod args;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use args::Args;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    if let Err(e) = logging::init(&args) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            debug!("Fatal error: {e:?}");
            eprintln!("{e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    // Defaults, then the config file, then top-level flags
    let config = args
        .generate
        .apply(commands::config::load_base(args.config.as_deref())?);

    match args.command {
        Some(commands::Command::Generate(generate_args)) => {
            commands::generate::execute(&generate_args.apply(config), args.quiet)
        }
        Some(commands::Command::Classify(classify_args)) => {
            commands::classify::execute(&classify_args, config)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(commands::Command::Config(config_args)) => {
            commands::config::execute(&config_args, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(commands::Command::Completions(comp_args)) => {
            commands::completions::execute(&comp_args)?;
            Ok(ExitCode::SUCCESS)
        }
        None => commands::generate::execute(&config, args.quiet),
    }
}

/// Map an error to the process exit code
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<kdr_core::Error>()
        .map_or(1, kdr_core::Error::exit_code)
}
