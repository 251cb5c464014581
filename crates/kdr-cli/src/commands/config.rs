//! Config command - configuration management

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use kdr_core::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "keenetic-dns-routes.toml";

/// Config command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,

    /// Write a configuration file with the default settings
    Init {
        /// Output file path
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute config command
pub fn execute(args: &ConfigArgs, base: &Config) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(base),
        ConfigAction::Init { output, force } => init_config(output, *force),
    }
}

/// Load the base configuration.
///
/// An explicit path must exist; otherwise `keenetic-dns-routes.toml` in the
/// working directory is used when present, falling back to the defaults.
pub fn load_base(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match find_config_file() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    debug!("Loading config from {}", path.display());
    let config = Config::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    path.is_file().then_some(path)
}

fn show_config(config: &Config) -> Result<()> {
    let toml_str = config.to_toml().context("Failed to serialize config")?;
    print!("{toml_str}");
    Ok(())
}

fn init_config(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            output.display()
        );
    }

    let toml_str = Config::default()
        .to_toml()
        .context("Failed to serialize config")?;

    let content = format!(
        "# keenetic-dns-routes configuration\n\
         # Command-line options override these values.\n\
         # Set unsupported_file = \"\" to skip the unsupported entries file.\n\n\
         {toml_str}"
    );

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write config to {}", output.display()))?;

    info!("Generated config file: {}", output.display());
    println!("Configuration file generated: {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kdr.toml");

        init_config(&path, false).unwrap();
        let loaded = load_base(Some(path.as_path())).unwrap();

        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kdr.toml");
        std::fs::write(&path, "strict = true\n").unwrap();

        assert!(init_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "strict = true\n");

        init_config(&path, true).unwrap();
        assert!(!load_base(Some(path.as_path())).unwrap().strict);
    }

    #[test]
    fn test_load_accepts_multi_label_tlds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kdr.toml");
        std::fs::write(&path, "keyword_tlds = [\"co.uk\", \"com\"]\n").unwrap();

        let loaded = load_base(Some(path.as_path())).unwrap();
        assert_eq!(loaded.keyword_tlds, vec!["co.uk", "com"]);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_base(Some(dir.path().join("missing.toml").as_path())).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kdr.toml");
        std::fs::write(&path, "output_file = \"\"\n").unwrap();

        assert!(load_base(Some(path.as_path())).is_err());
    }
}
