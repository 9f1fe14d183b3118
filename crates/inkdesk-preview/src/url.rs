use reqwest::Url;

/// Normalize user-entered link input before it becomes an href: trim, keep
/// an explicit http(s) scheme, default to https otherwise. Empty input is
/// rejected so the caller drops the command instead of linking to nothing.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Hostname of `url`, if it parses as an absolute URL with a host.
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("example.com", Some("https://example.com"))]
    #[case("  example.com  ", Some("https://example.com"))]
    #[case("https://example.com", Some("https://example.com"))]
    #[case("HTTP://example.com", Some("HTTP://example.com"))]
    #[case("ftp.example.com", Some("https://ftp.example.com"))]
    #[case("", None)]
    #[case("   ", None)]
    fn normalizes_urls(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_url(input).as_deref(), expected);
    }

    #[test]
    fn host_of_parses_absolute_urls_only() {
        assert_eq!(host_of("https://example.com/a/b"), Some("example.com".into()));
        assert_eq!(host_of("https://localhost"), Some("localhost".into()));
        assert_eq!(host_of("not a url"), None);
        assert_eq!(host_of("example.com"), None);
    }
}
