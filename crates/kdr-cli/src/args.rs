//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::commands::generate::GenerateArgs;
use crate::commands::Command;

/// keenetic-dns-routes - rule list to Keenetic DNS-Based Routes converter
///
/// Reads `*.list` rule files (DOMAIN, DOMAIN-SUFFIX, DOMAIN-KEYWORD and bare
/// domains) and writes a flat domain list for Keenetic DNS-Based Routes.
/// Running without a subcommand is the same as `generate`.
#[derive(Parser, Debug)]
#[command(name = "keenetic-dns-routes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Generator options used when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Log file path
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Run in quiet mode (errors only, no summary)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Compact format
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["keenetic-dns-routes"]);
        assert!(args.command.is_none());
        assert!(args.generate.input_dir.is_none());
        assert!(args.generate.unsupported_file.is_none());
        assert!(!args.generate.strict);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_top_level_generate_flags() {
        let args = Args::parse_from([
            "keenetic-dns-routes",
            "--input-dir",
            "rules",
            "--unsupported-file",
            "",
            "--strict",
            "--keyword-tlds",
            "com,net",
        ]);
        assert_eq!(args.generate.input_dir, Some(PathBuf::from("rules")));
        assert_eq!(args.generate.unsupported_file.as_deref(), Some(""));
        assert!(args.generate.strict);
        assert_eq!(args.generate.keyword_tlds.as_deref(), Some("com,net"));
    }

    #[test]
    fn test_generate_subcommand() {
        let args = Args::parse_from(["keenetic-dns-routes", "generate", "--strict"]);
        match args.command {
            Some(Command::Generate(generate)) => assert!(generate.strict),
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn test_verbose() {
        let args = Args::parse_from(["keenetic-dns-routes", "-v"]);
        assert_eq!(args.verbose, 1);

        let args = Args::parse_from(["keenetic-dns-routes", "classify", "x.com", "-vvv"]);
        assert_eq!(args.verbose, 3);
    }

    #[test]
    fn test_no_strict_flag() {
        let args = Args::parse_from(["keenetic-dns-routes", "--no-strict"]);
        assert!(args.generate.no_strict);
        assert!(!args.generate.strict);

        let args = Args::parse_from(["keenetic-dns-routes", "--no-strict", "--strict"]);
        assert!(args.generate.strict);
        assert!(!args.generate.no_strict);
    }

    #[test]
    fn test_top_level_flags_before_subcommand() {
        let args = Args::parse_from([
            "keenetic-dns-routes",
            "--keyword-tlds",
            "fr",
            "classify",
            "DOMAIN-KEYWORD,shop",
        ]);
        assert_eq!(args.generate.keyword_tlds.as_deref(), Some("fr"));
        assert!(matches!(args.command, Some(Command::Classify(_))));
    }
}
