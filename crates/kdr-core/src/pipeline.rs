//! Generator pipeline
//!
//! Discover rule lists, aggregate them in file-name order, then write the
//! domain list followed by the unsupported entries.

use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::aggregate::{Aggregator, Stats};
use crate::config::Config;
use crate::error::Result;
use crate::source::{discover_lists, read_list};
use crate::writer::write_list;

/// Outcome of one generator run
#[derive(Debug, Clone)]
pub struct Report {
    /// Rule lists processed, in processing order
    pub files: Vec<PathBuf>,
    /// Domains written to the output file
    pub domains: Vec<String>,
    /// Entries that could not be translated
    pub unsupported: Vec<String>,
    /// Counters collected during aggregation
    pub stats: Stats,
}

impl Report {
    /// Whether any unsupported entries were found
    pub fn has_unsupported(&self) -> bool {
        !self.unsupported.is_empty()
    }
}

/// Aggregate the given rule lists in order without writing anything.
pub fn collect(files: &[PathBuf], keyword_tlds: &[String]) -> Result<Aggregator> {
    let mut aggregator = Aggregator::new(keyword_tlds.to_vec());
    for path in files {
        let text = read_list(path)?;
        debug!("Reading {}", path.display());
        aggregator.push_text(&text);
        aggregator.finish_file();
    }
    Ok(aggregator)
}

/// Run the generator for `config`.
///
/// The domain list is written before the unsupported list, so a failure on
/// the latter leaves the former intact.
#[instrument(skip(config), fields(input_dir = %config.input_dir.display()))]
pub fn run(config: &Config) -> Result<Report> {
    let files = discover_lists(&config.input_dir)?;
    info!("Found {} rule lists", files.len());

    let aggregator = collect(&files, &config.keyword_tlds)?;
    let (domains, unsupported, stats) = aggregator.into_parts();

    write_list(Some(config.output_file.as_path()), &domains)?;
    write_list(config.unsupported_path(), &unsupported)?;

    info!(
        files = stats.files,
        lines = stats.lines,
        domains = domains.len(),
        unsupported = unsupported.len(),
        "Generated {}",
        config.output_file.display()
    );

    Ok(Report {
        files,
        domains,
        unsupported,
        stats,
    })
}
