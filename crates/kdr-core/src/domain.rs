//! Domain normalization and keyword expansion
//!
//! Keenetic DNS-Based Routes match on whole domains and their subdomains.
//! There is no substring matching, so `DOMAIN-KEYWORD` rules are
//! approximated by guessing `<keyword>.<tld>` for a list of common top-level
//! domains. The guess is lossy: `tracker` will never cover
//! `mytracker.example`, and `tracker.co.uk` only when `co.uk` is listed.

/// Top-level domains used for keyword expansion when none are configured.
pub const DEFAULT_KEYWORD_TLDS: [&str; 34] = [
    "com", "net", "org", "ru", "de", "nl", "uk", "co", "io", "info", "biz", "app", "dev", "me",
    "tv", "eu", "us", "ca", "fr", "es", "it", "pl", "cz", "tr", "ua", "by", "kz", "cn", "jp",
    "kr", "in", "br", "au", "sg",
];

/// The default TLD list as owned strings.
pub fn default_keyword_tlds() -> Vec<String> {
    DEFAULT_KEYWORD_TLDS.iter().map(|t| (*t).to_string()).collect()
}

/// Normalize a domain: trim, lower-case, drop one trailing root dot.
///
/// An empty result means the value carried no domain and must be discarded.
pub fn normalize(value: &str) -> String {
    let mut v = value.trim().to_lowercase();
    if v.ends_with('.') {
        v.pop();
    }
    v
}

/// Expand a keyword into concrete domains.
///
/// Values that already contain a dot are treated as qualified domains and
/// returned as-is after normalization.
pub fn expand_keyword<S: AsRef<str>>(keyword: &str, tlds: &[S]) -> Vec<String> {
    let normalized = normalize(keyword);
    if normalized.is_empty() {
        return Vec::new();
    }
    if normalized.contains('.') {
        return vec![normalized];
    }
    tlds.iter()
        .map(|tld| format!("{normalized}.{}", tld.as_ref()))
        .collect()
}

/// Parse a comma-separated TLD list.
///
/// Entries are trimmed and lower-cased; empty entries are dropped.
pub fn parse_tld_list(list: &str) -> Vec<String> {
    normalize_tlds(list.split(','))
}

/// Normalize already-split TLD entries the same way [`parse_tld_list`] does.
pub fn normalize_tlds<I, S>(tlds: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tlds.into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
