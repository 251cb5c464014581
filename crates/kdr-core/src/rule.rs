//! Rule line classification
//!
//! Rule lists use the proxy/ad-blocking syntax `PREFIX,value`, one rule per
//! line. Lines without a comma are treated as bare domains.
//!
//! ```text
//! # comment
//! // also a comment
//! example.com
//! DOMAIN,api.example.com
//! DOMAIN-SUFFIX,example.org
//! DOMAIN-KEYWORD,tracker
//! IP-CIDR,10.0.0.0/8        <- passed through as unsupported
//! ```

/// Prefix for exact-match rules
pub const PREFIX_DOMAIN: &str = "DOMAIN";
/// Prefix for suffix-match rules
pub const PREFIX_DOMAIN_SUFFIX: &str = "DOMAIN-SUFFIX";
/// Prefix for substring-match rules
pub const PREFIX_DOMAIN_KEYWORD: &str = "DOMAIN-KEYWORD";

/// Rule prefixes the generator understands.
pub const SUPPORTED_PREFIXES: [&str; 3] =
    [PREFIX_DOMAIN, PREFIX_DOMAIN_SUFFIX, PREFIX_DOMAIN_KEYWORD];

/// A classified rule line.
///
/// Payloads borrow from the line passed to [`classify`]. Skipped lines
/// (blank or comment) are represented by `None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule<'a> {
    /// Exact or suffix domain; payload is the domain value
    Domain(&'a str),
    /// Substring keyword; payload is the keyword value
    Keyword(&'a str),
    /// Supported prefix without a handler; payload is the whole line
    Unknown(&'a str),
    /// Unrecognized prefix; payload is the whole line
    Raw(&'a str),
}

impl<'a> Rule<'a> {
    /// Payload carried by the rule
    pub fn value(&self) -> &'a str {
        match *self {
            Rule::Domain(v) | Rule::Keyword(v) | Rule::Unknown(v) | Rule::Raw(v) => v,
        }
    }

    /// Short kind name, used in logs and the `classify` command
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Domain(_) => "domain",
            Rule::Keyword(_) => "keyword",
            Rule::Unknown(_) => "unknown",
            Rule::Raw(_) => "raw",
        }
    }

    /// Whether the rule ends up in the unsupported list
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Rule::Unknown(_) | Rule::Raw(_))
    }
}

/// Check whether a trimmed line is blank or a comment.
fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with("//")
}

/// Classify one raw line.
///
/// Returns `None` for blank lines and `#` / `//` comments. Splits on the
/// first comma only, so values may themselves contain commas.
pub fn classify(raw_line: &str) -> Option<Rule<'_>> {
    let line = raw_line.trim();
    if is_skippable(line) {
        return None;
    }

    let Some((prefix, value)) = line.split_once(',') else {
        return Some(Rule::Domain(line));
    };

    let prefix = prefix.trim();
    let value = value.trim();

    let rule = match prefix {
        PREFIX_DOMAIN | PREFIX_DOMAIN_SUFFIX => Rule::Domain(value),
        PREFIX_DOMAIN_KEYWORD => Rule::Keyword(value),
        p if SUPPORTED_PREFIXES.contains(&p) => Rule::Unknown(line),
        _ => Rule::Raw(line),
    };

    Some(rule)
}
