//! Generate command - rule lists to domain list conversion

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use kdr_core::{parse_tld_list, pipeline, Config, Report};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

/// Exit code when strict mode finds unsupported entries
const EXIT_UNSUPPORTED: u8 = 1;

/// Generate command arguments
///
/// Every option overrides the configuration file, which in turn overrides
/// the built-in defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Directory with *.list files [default: litsts]
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Output file for the domain list [default: generated/keenetic_dns_routes.txt]
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output file for unsupported entries, "" to disable
    /// [default: generated/keenetic_dns_routes_unsupported.txt]
    #[arg(long, value_name = "FILE")]
    pub unsupported_file: Option<String>,

    /// Exit non-zero if unsupported entries are found
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Disable strict mode set by the configuration file
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,

    /// Comma-separated TLDs for DOMAIN-KEYWORD expansion [default: 34 common TLDs]
    #[arg(long, value_name = "LIST")]
    pub keyword_tlds: Option<String>,
}

impl GenerateArgs {
    /// Layer these arguments over `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(file) = &self.output_file {
            config.output_file = file.clone();
        }
        if let Some(file) = &self.unsupported_file {
            config.unsupported_file = PathBuf::from(file);
        }
        if self.strict {
            config.strict = true;
        } else if self.no_strict {
            config.strict = false;
        }
        if let Some(tlds) = &self.keyword_tlds {
            config.keyword_tlds = parse_tld_list(tlds);
        }
        config
    }
}

/// Execute generate command with the fully layered configuration
pub fn execute(config: &Config, quiet: bool) -> Result<ExitCode> {
    config.validate()?;

    let report = pipeline::run(config)?;

    if !quiet {
        print_summary(config, &report);
    }

    if report.has_unsupported() && config.strict {
        eprintln!(
            "Found {} unsupported entries. See {}.",
            report.unsupported.len(),
            config.unsupported_file.display()
        );
        return Ok(ExitCode::from(EXIT_UNSUPPORTED));
    }

    if report.has_unsupported() {
        warn!(
            "{} unsupported entries were skipped",
            report.unsupported.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn print_summary(config: &Config, report: &Report) {
    println!(
        "{} {} domains from {} lists -> {}",
        "✓".green(),
        report.domains.len().to_string().green(),
        report.files.len(),
        config.output_file.display().to_string().cyan()
    );

    if !report.has_unsupported() {
        return;
    }

    match config.unsupported_path() {
        Some(path) => println!(
            "{} {} unsupported entries -> {}",
            "!".yellow(),
            report.unsupported.len().to_string().yellow(),
            path.display().to_string().cyan()
        ),
        None => println!(
            "{} {} unsupported entries (not written)",
            "!".yellow(),
            report.unsupported.len().to_string().yellow()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_apply_keeps_base_when_unset() {
        let base = Config {
            strict: true,
            ..Config::default()
        };
        let config = GenerateArgs::default().apply(base.clone());
        assert_eq!(config, base);
    }

    #[test]
    fn test_apply_overrides() {
        let args = GenerateArgs {
            input_dir: Some(PathBuf::from("rules")),
            output_file: Some(PathBuf::from("out.txt")),
            unsupported_file: Some(String::new()),
            strict: true,
            no_strict: false,
            keyword_tlds: Some(" COM,,net ".to_string()),
        };

        let config = args.apply(Config::default());

        assert_eq!(config.input_dir, Path::new("rules"));
        assert_eq!(config.output_file, Path::new("out.txt"));
        assert_eq!(config.unsupported_path(), None);
        assert!(config.strict);
        assert_eq!(config.keyword_tlds, vec!["com", "net"]);
    }

    #[test]
    fn test_no_strict_clears_config_value() {
        let base = Config {
            strict: true,
            ..Config::default()
        };
        let args = GenerateArgs {
            no_strict: true,
            ..GenerateArgs::default()
        };
        assert!(!args.apply(base).strict);
    }
}
