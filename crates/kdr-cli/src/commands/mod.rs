//! CLI commands

pub mod classify;
pub mod completions;
pub mod config;
pub mod generate;

use clap::Subcommand;

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the domain list (default when no subcommand is given)
    Generate(generate::GenerateArgs),

    /// Show how rule lines are classified and expanded
    Classify(classify::ClassifyArgs),

    /// Configuration management
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
