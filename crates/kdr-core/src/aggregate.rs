//! Domain aggregation
//!
//! Collects classified rules into two ordered, duplicate-free lists:
//! routable domains and unsupported entries. Keyword expansions share the
//! same namespace as literal domains, so whichever produces a domain first
//! decides its position.

use std::collections::HashSet;
use tracing::trace;

use crate::domain::{expand_keyword, normalize};
use crate::rule::{classify, Rule};
use crate::source::split_lines;

/// Counters collected while aggregating
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    /// List files read
    pub files: usize,
    /// Lines fed to the aggregator
    pub lines: usize,
    /// Blank and comment lines
    pub skipped: usize,
    /// `DOMAIN`, `DOMAIN-SUFFIX` and bare domain lines
    pub domain_rules: usize,
    /// `DOMAIN-KEYWORD` lines
    pub keyword_rules: usize,
    /// Lines with an unsupported or unrecognized prefix
    pub unsupported_rules: usize,
    /// Domains dropped because they were already collected
    pub duplicate_domains: usize,
    /// Unsupported entries dropped because they were already collected
    pub duplicate_unsupported: usize,
}

/// Ordered set of unique strings
#[derive(Debug, Default, Clone)]
struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    /// Append `value` unless it is empty or already present.
    ///
    /// Returns `false` only for duplicates.
    fn insert(&mut self, value: String) -> bool {
        if value.is_empty() {
            return true;
        }
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }
}

/// Accumulator for one generator run
#[derive(Debug, Clone)]
pub struct Aggregator {
    keyword_tlds: Vec<String>,
    domains: OrderedSet,
    unsupported: OrderedSet,
    stats: Stats,
}

impl Aggregator {
    /// Create an empty aggregator expanding keywords over `keyword_tlds`
    pub fn new(keyword_tlds: Vec<String>) -> Self {
        Self {
            keyword_tlds,
            domains: OrderedSet::default(),
            unsupported: OrderedSet::default(),
            stats: Stats::default(),
        }
    }

    /// Feed one raw line
    pub fn push_line(&mut self, raw_line: &str) {
        self.stats.lines += 1;
        match classify(raw_line) {
            Some(rule) => self.push_rule(rule),
            None => self.stats.skipped += 1,
        }
    }

    /// Feed every line of a rule list's contents
    pub fn push_text(&mut self, text: &str) {
        for line in split_lines(text) {
            self.push_line(line);
        }
    }

    /// Feed an already classified rule
    pub fn push_rule(&mut self, rule: Rule<'_>) {
        match rule {
            Rule::Domain(value) => {
                self.stats.domain_rules += 1;
                self.add_domain(normalize(value));
            }
            Rule::Keyword(value) => {
                self.stats.keyword_rules += 1;
                for domain in expand_keyword(value, &self.keyword_tlds) {
                    self.add_domain(domain);
                }
            }
            Rule::Unknown(line) | Rule::Raw(line) => {
                self.stats.unsupported_rules += 1;
                trace!(kind = rule.kind(), line, "Unsupported rule");
                if !self.unsupported.insert(normalize(line)) {
                    self.stats.duplicate_unsupported += 1;
                }
            }
        }
    }

    /// Record that a list file has been fully fed
    pub fn finish_file(&mut self) {
        self.stats.files += 1;
    }

    fn add_domain(&mut self, domain: String) {
        if !self.domains.insert(domain) {
            self.stats.duplicate_domains += 1;
        }
    }

    /// Collected domains in first-seen order
    pub fn domains(&self) -> &[String] {
        &self.domains.items
    }

    /// Collected unsupported entries in first-seen order
    pub fn unsupported(&self) -> &[String] {
        &self.unsupported.items
    }

    /// Counters so far
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Consume the aggregator, returning `(domains, unsupported, stats)`
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, Stats) {
        (self.domains.items, self.unsupported.items, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tlds(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_sample_list() {
        let mut agg = Aggregator::new(tlds(&["com", "net"]));
        agg.push_text(
            "example.com\nDOMAIN-SUFFIX,EXAMPLE.ORG.\nDOMAIN-KEYWORD,test\nDOMAIN-MATCH,foo.com\n# comment\n",
        );

        assert_eq!(
            agg.domains(),
            ["example.com", "example.org", "test.com", "test.net"]
        );
        assert_eq!(agg.unsupported(), ["domain-match,foo.com"]);
    }

    #[test]
    fn test_case_insensitive_dedup() {
        let mut agg = Aggregator::new(Vec::new());
        agg.push_line("Example.com");
        agg.push_line("DOMAIN,EXAMPLE.COM.");
        agg.push_line("DOMAIN-SUFFIX,example.com");

        assert_eq!(agg.domains(), ["example.com"]);
        assert_eq!(agg.stats().duplicate_domains, 2);
    }

    #[test]
    fn test_keyword_and_literal_share_namespace() {
        let mut agg = Aggregator::new(tlds(&["com", "net"]));
        agg.push_line("DOMAIN,test.net");
        agg.push_line("DOMAIN-KEYWORD,test");

        assert_eq!(agg.domains(), ["test.net", "test.com"]);

        let mut agg = Aggregator::new(tlds(&["com", "net"]));
        agg.push_line("DOMAIN-KEYWORD,test");
        agg.push_line("DOMAIN,test.net");

        assert_eq!(agg.domains(), ["test.com", "test.net"]);
    }

    #[test]
    fn test_empty_values_are_dropped() {
        let mut agg = Aggregator::new(tlds(&["com"]));
        agg.push_line("DOMAIN,");
        agg.push_line("DOMAIN-SUFFIX, . ");
        agg.push_line("DOMAIN-KEYWORD,");

        assert!(agg.domains().is_empty());
        assert!(agg.unsupported().is_empty());
        assert_eq!(agg.stats().duplicate_domains, 0);
    }

    #[test]
    fn test_unsupported_dedup() {
        let mut agg = Aggregator::new(Vec::new());
        agg.push_line("IP-CIDR,10.0.0.0/8");
        agg.push_line("ip-cidr,10.0.0.0/8");
        agg.push_line("  IP-CIDR,10.0.0.0/8.");

        assert_eq!(agg.unsupported(), ["ip-cidr,10.0.0.0/8"]);
        assert_eq!(agg.stats().unsupported_rules, 3);
        assert_eq!(agg.stats().duplicate_unsupported, 2);
    }

    #[test]
    fn test_unsupported_does_not_touch_domains() {
        let mut agg = Aggregator::new(Vec::new());
        agg.push_line("PROCESS-NAME,example.com");
        agg.push_line("example.com");

        assert_eq!(agg.domains(), ["example.com"]);
        assert_eq!(agg.unsupported(), ["process-name,example.com"]);
    }

    #[test]
    fn test_stats() {
        let mut agg = Aggregator::new(tlds(&["com", "net", "org"]));
        agg.push_text("\n# c\n// c\na.com\nDOMAIN-KEYWORD,kw\nUSER-AGENT,x\n");
        agg.finish_file();

        let stats = agg.stats();
        assert_eq!(stats.files, 1);
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.skipped, 3);
        assert_eq!(stats.domain_rules, 1);
        assert_eq!(stats.keyword_rules, 1);
        assert_eq!(stats.unsupported_rules, 1);
        assert_eq!(agg.domains().len(), 4);
    }

    #[test]
    fn test_crlf_lines() {
        let mut agg = Aggregator::new(Vec::new());
        agg.push_text("a.com\r\nDOMAIN,b.com\r\n");

        assert_eq!(agg.domains(), ["a.com", "b.com"]);
    }

    #[test]
    fn test_cr_only_lines() {
        let mut agg = Aggregator::new(Vec::new());
        agg.push_text("a.com\rDOMAIN,b.com\r");

        assert_eq!(agg.domains(), ["a.com", "b.com"]);
        assert!(agg.unsupported().is_empty());
        assert_eq!(agg.stats().lines, 2);
    }

    #[test]
    fn test_into_parts() {
        let mut agg = Aggregator::new(Vec::new());
        agg.push_line("a.com");
        agg.push_line("GEOIP,CN");

        let (domains, unsupported, stats) = agg.into_parts();
        assert_eq!(domains, vec!["a.com"]);
        assert_eq!(unsupported, vec!["geoip,cn"]);
        assert_eq!(stats.lines, 2);
    }
}
