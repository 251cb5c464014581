//! Classify command - inspect how rule lines are translated
//!
//! Runs single lines through the classifier and expander without touching
//! any files.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use kdr_core::{classify, expand_keyword, normalize, parse_tld_list, Config, Rule};

/// Classify command arguments
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Rule lines to classify, e.g. "DOMAIN-KEYWORD,tracker"
    #[arg(required = true, value_name = "LINE")]
    pub lines: Vec<String>,

    /// Comma-separated TLDs for DOMAIN-KEYWORD expansion
    #[arg(long, value_name = "LIST")]
    pub keyword_tlds: Option<String>,
}

/// Result of translating one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Blank line or comment
    Skipped,
    /// Domains that would be written to the route list
    Domains(Vec<String>),
    /// Entry that would be written to the unsupported list
    Unsupported(String),
}

/// Translate one line the way the generator does
pub fn translate(line: &str, keyword_tlds: &[String]) -> (Option<&'static str>, Translation) {
    let Some(rule) = classify(line) else {
        return (None, Translation::Skipped);
    };

    let translation = match rule {
        Rule::Domain(value) => {
            let domain = normalize(value);
            if domain.is_empty() {
                Translation::Domains(Vec::new())
            } else {
                Translation::Domains(vec![domain])
            }
        }
        Rule::Keyword(value) => Translation::Domains(expand_keyword(value, keyword_tlds)),
        Rule::Unknown(line) | Rule::Raw(line) => Translation::Unsupported(normalize(line)),
    };

    (Some(rule.kind()), translation)
}

/// Execute classify command
pub fn execute(args: &ClassifyArgs, base: Config) -> Result<()> {
    let keyword_tlds = match &args.keyword_tlds {
        Some(tlds) => parse_tld_list(tlds),
        None => base.keyword_tlds,
    };

    for line in &args.lines {
        let (kind, translation) = translate(line, &keyword_tlds);

        println!("{}", "─".repeat(50).bright_black());
        println!("Line: {}", line.cyan());
        println!("Kind: {}", kind.unwrap_or("none"));

        match translation {
            Translation::Skipped => println!("Result: {}", "skipped".dimmed()),
            Translation::Domains(domains) if domains.is_empty() => {
                println!("Result: {}", "no domains".dimmed());
            }
            Translation::Domains(domains) => {
                println!("Result: {} domain(s)", domains.len().to_string().green());
                for domain in &domains {
                    println!("  {} {}", "●".green(), domain);
                }
            }
            Translation::Unsupported(entry) => {
                println!("Result: {}", "unsupported".yellow());
                println!("  {} {}", "◉".yellow(), entry);
            }
        }
    }
    println!("{}", "─".repeat(50).bright_black());

    Ok(())
}
