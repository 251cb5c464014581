//! # Keenetic DNS Routes Core
//!
//! Converts proxy/ad-blocking rule lists into flat domain lists for the
//! Keenetic DNS-Based Routes feature.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **Classification** - `DOMAIN`, `DOMAIN-SUFFIX`, `DOMAIN-KEYWORD` and bare domain lines
//! - **Normalization** - lower-casing and root dot removal
//! - **Keyword expansion** - `keyword` becomes `keyword.<tld>` for a TLD list
//! - **Aggregation** - ordered, duplicate-free domain and unsupported lists
//! - **Configuration** - TOML-backed run settings
//!
//! ## Example
//!
//! ```rust
//! use kdr_core::Aggregator;
//!
//! let mut aggregator = Aggregator::new(vec!["com".into(), "net".into()]);
//! aggregator.push_text("DOMAIN-SUFFIX,Example.ORG.\nDOMAIN-KEYWORD,test\nIP-CIDR,10.0.0.0/8\n");
//!
//! assert_eq!(aggregator.domains(), ["example.org", "test.com", "test.net"]);
//! assert_eq!(aggregator.unsupported(), ["ip-cidr,10.0.0.0/8"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod rule;
pub mod source;
pub mod writer;

// Re-exports for convenience
pub use aggregate::{Aggregator, Stats};
pub use config::Config;
pub use domain::{expand_keyword, normalize, parse_tld_list, DEFAULT_KEYWORD_TLDS};
pub use error::{Error, Result};
pub use pipeline::{run, Report};
pub use rule::{classify, Rule};
pub use writer::write_list;
