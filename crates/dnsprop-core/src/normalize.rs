//! Domain normalization.

/// Strip a leading `http://` or `https://` and then a leading `www.`.
///
/// Each prefix is removed at most once; the rest is returned unchanged.
#[must_use]
pub fn normalize_domain(domain: &str) -> &str {
    let rest = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain);

    rest.strip_prefix("www.").unwrap_or(rest)
}
