use crate::url::host_of;

/// Separator patterns sites append their brand after; the title is cut at
/// the first one present.
const SEPARATORS: [&str; 3] = [" | ", " - ", " · "];

/// Derive the popup's display title from a resolved title. `None` means
/// "nothing better than the raw URL": the title is blank or is just the
/// hostname echoed back.
pub fn derive_title(title: &str, href: &str) -> Option<String> {
    let raw = title.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(host) = host_of(href)
        && raw.eq_ignore_ascii_case(&host)
    {
        return None;
    }

    let cut = SEPARATORS
        .iter()
        .filter_map(|separator| raw.find(separator))
        .min();
    match cut {
        Some(index) => {
            let head = raw[..index].trim();
            if head.is_empty() {
                Some(raw.to_string())
            } else {
                Some(head.to_string())
            }
        }
        None => Some(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::derive_title;

    const HREF: &str = "https://example.com/post";

    #[rstest]
    #[case("Example Post | Example Inc", Some("Example Post"))]
    #[case("Example Post - Blog", Some("Example Post"))]
    #[case("Example Post · Feed", Some("Example Post"))]
    #[case("Plain title", Some("Plain title"))]
    #[case("  Plain title  ", Some("Plain title"))]
    #[case("", None)]
    #[case("   ", None)]
    fn derives_titles(#[case] title: &str, #[case] expected: Option<&str>) {
        assert_eq!(derive_title(title, HREF).as_deref(), expected);
    }

    #[test]
    fn cuts_at_the_earliest_separator() {
        assert_eq!(
            derive_title("A - B | C", HREF).as_deref(),
            Some("A")
        );
    }

    #[test]
    fn hostname_echo_is_no_title() {
        assert_eq!(derive_title("example.com", HREF), None);
        assert_eq!(derive_title("EXAMPLE.COM", HREF), None);
        // A real title that merely mentions the host still counts.
        assert_eq!(
            derive_title("example.com docs", HREF).as_deref(),
            Some("example.com docs")
        );
    }

    #[test]
    fn unparseable_href_still_derives_from_the_title() {
        assert_eq!(derive_title("Somewhere", "not a url").as_deref(), Some("Somewhere"));
    }
}
