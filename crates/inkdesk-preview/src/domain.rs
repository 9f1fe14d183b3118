use crate::resolver::LinkPreview;
use crate::url::host_of;

/// Conservative allow-list of top-level segments a registrable domain can
/// plausibly end in. Anything else gets the generic globe glyph rather
/// than a favicon request that would 404 or mislead.
const KNOWN_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "io", "dev", "app", "ai", "co", "me",
    "info", "biz", "xyz", "tv", "cc", "sh", "gg", "fm", "to", "ly", "so", "am", "us", "uk",
    "de", "fr", "es", "it", "nl", "se", "no", "fi", "dk", "pl", "cz", "at", "ch", "be", "ie",
    "pt", "gr", "ru", "ua", "jp", "cn", "kr", "in", "sg", "hk", "tw", "au", "nz", "ca", "br",
    "mx", "ar", "cl", "za", "il", "tr", "sa", "ae",
];

/// Whether `domain` looks like a registrable hostname: allow-set characters
/// only, an interior dot, and a known top-level segment.
pub fn is_valid_domain(domain: &str) -> bool {
    let valid_chars = domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let has_dot = domain.contains('.');
    let no_edge_dot = !domain.starts_with('.') && !domain.ends_with('.');
    let known_tld = domain
        .rsplit('.')
        .next()
        .is_some_and(|tld| KNOWN_TLDS.contains(&tld.to_ascii_lowercase().as_str()));

    valid_chars && has_dot && no_edge_dot && known_tld && domain.len() >= 4
}

/// Favicon URL for a link, or `None` for the generic globe fallback.
///
/// Falls back when the href does not parse, the host is not a plausible
/// registrable domain, or the preview is placeholder-like (title is just
/// the hostname and nothing else resolved) — a favicon would then suggest
/// more than the provider actually found.
pub fn favicon_src(href: &str, preview: &LinkPreview, favicon_endpoint: &str) -> Option<String> {
    let domain = host_of(href)?;
    if !is_valid_domain(&domain) {
        return None;
    }

    let placeholder_preview = preview.title.trim().eq_ignore_ascii_case(&domain)
        && preview.image.is_empty()
        && preview.description.is_empty();
    if placeholder_preview {
        return None;
    }

    Some(format!("{favicon_endpoint}?sz=64&domain={domain}"))
}
