use crate::handle::EditorHandle;
use crate::types::{
    Alignment, AttrMap, FontSizeReading, FormatKind, LineHeight, ListKind, attr,
};

pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";
pub const DEFAULT_FONT_SIZE_PX: u32 = 16;
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#ffffff";

/// Canonical engine form of a font size: bare pixels with a `px` suffix.
pub fn px_string(size: u32) -> String {
    format!("{size}px")
}

/// Parse the engine's `"{n}px"` form back to a bare integer. Zero and
/// malformed values are rejected.
pub fn parse_px(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed);
    digits.parse().ok().filter(|size| *size > 0)
}

/// Validate user-typed size input: positive integers only. Anything else
/// means the attempted command is silently dropped.
pub fn parse_size_input(input: &str) -> Option<u32> {
    let size: u32 = input.trim().parse().ok()?;
    (size > 0).then_some(size)
}

/// Read-only projection of the formatting attributes at the current
/// selection. Recomputed on every engine notification, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSnapshot {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub task_list: bool,
    pub font_family: String,
    pub font_size: FontSizeReading,
    pub text_color: String,
    pub highlight_color: String,
    /// 1..=3 for headings, 0 for normal text.
    pub heading_level: u8,
    pub align: Alignment,
    pub list: Option<ListKind>,
    pub line_height: LineHeight,
    pub link_href: Option<String>,
    pub image_src: Option<String>,
}

impl Default for FormatSnapshot {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            task_list: false,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: FontSizeReading::Px(DEFAULT_FONT_SIZE_PX),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            heading_level: 0,
            align: Alignment::Left,
            list: None,
            line_height: LineHeight::Normal,
            link_href: None,
            image_src: None,
        }
    }
}

impl FormatSnapshot {
    /// Project the current formatting state out of the engine. Never
    /// panics; an absent or dead handle yields the documented defaults.
    pub fn read(handle: Option<&EditorHandle>) -> Self {
        let Some(handle) = handle.filter(|h| h.is_live()) else {
            return Self::default();
        };

        let none = AttrMap::new();
        let attr_of = |kind: FormatKind, key: &str| -> Option<String> {
            handle.attributes(kind).remove(key)
        };

        let font_family =
            attr_of(FormatKind::FontFamily, attr::FONT_FAMILY).unwrap_or_else(|| {
                DEFAULT_FONT_FAMILY.to_string()
            });

        let text_color = attr_of(FormatKind::TextColor, attr::COLOR)
            .map(|c| c.to_lowercase())
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string());

        let highlight_color = attr_of(FormatKind::Highlight, attr::COLOR)
            .unwrap_or_else(|| DEFAULT_HIGHLIGHT_COLOR.to_string());

        let heading_level = (1..=3u8)
            .find(|level| {
                let mut query = AttrMap::new();
                query.insert(attr::LEVEL.to_string(), level.to_string());
                handle.is_active(FormatKind::Heading, &query)
            })
            .unwrap_or(0);

        let align = Alignment::ALL
            .into_iter()
            .find(|candidate| {
                let mut query = AttrMap::new();
                query.insert(attr::ALIGN.to_string(), candidate.as_str().to_string());
                handle.is_active(FormatKind::Align, &query)
            })
            .unwrap_or_default();

        let list = if handle.is_active(FormatKind::BulletList, &none) {
            Some(ListKind::Bullet)
        } else if handle.is_active(FormatKind::OrderedList, &none) {
            Some(ListKind::Ordered)
        } else {
            None
        };

        let line_height = attr_of(FormatKind::LineHeight, attr::LINE_HEIGHT)
            .and_then(|value| LineHeight::parse(&value))
            .unwrap_or_default();

        let link_href = handle
            .is_active(FormatKind::Link, &none)
            .then(|| attr_of(FormatKind::Link, attr::HREF))
            .flatten();

        Self {
            bold: handle.is_active(FormatKind::Bold, &none),
            italic: handle.is_active(FormatKind::Italic, &none),
            underline: handle.is_active(FormatKind::Underline, &none),
            task_list: handle.is_active(FormatKind::TaskList, &none),
            font_family,
            font_size: read_font_size(handle),
            text_color,
            highlight_color,
            heading_level,
            align,
            list,
            line_height,
            link_href,
            image_src: attr_of(FormatKind::Image, attr::SRC),
        }
    }

    /// Display projection for a single kind — the `getActive` contract.
    pub fn value(&self, kind: FormatKind) -> String {
        match kind {
            FormatKind::Bold => self.bold.to_string(),
            FormatKind::Italic => self.italic.to_string(),
            FormatKind::Underline => self.underline.to_string(),
            FormatKind::TaskList => self.task_list.to_string(),
            FormatKind::FontFamily => self.font_family.clone(),
            FormatKind::FontSize => self.font_size.display(),
            FormatKind::TextColor => self.text_color.clone(),
            FormatKind::Highlight => self.highlight_color.clone(),
            FormatKind::Heading => self.heading_level.to_string(),
            FormatKind::Align => self.align.as_str().to_string(),
            FormatKind::BulletList => (self.list == Some(ListKind::Bullet)).to_string(),
            FormatKind::OrderedList => (self.list == Some(ListKind::Ordered)).to_string(),
            FormatKind::LineHeight => self.line_height.css_value().to_string(),
            FormatKind::Link => self.link_href.clone().unwrap_or_default(),
            FormatKind::Image => self.image_src.clone().unwrap_or_default(),
        }
    }
}

/// Mixed-size detection: more than one distinct size across the selection
/// reads as `Mixed`; none falls back to the cursor attributes, then the
/// default.
fn read_font_size(handle: &EditorHandle) -> FontSizeReading {
    let values = handle.selection_mark_values(FormatKind::FontSize, attr::FONT_SIZE);
    match values.as_slice() {
        [] => FontSizeReading::Px(
            handle
                .attributes(FormatKind::FontSize)
                .get(attr::FONT_SIZE)
                .and_then(|value| parse_px(value))
                .unwrap_or(DEFAULT_FONT_SIZE_PX),
        ),
        [single] => FontSizeReading::Px(parse_px(single).unwrap_or(DEFAULT_FONT_SIZE_PX)),
        _ => FontSizeReading::Mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("24px", Some(24))]
    #[case("  16px ", Some(16))]
    #[case("16", Some(16))]
    #[case("0px", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn parses_px_values(#[case] input: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_px(input), expected);
    }

    #[rstest]
    #[case("24", Some(24))]
    #[case(" 8 ", Some(8))]
    #[case("0", None)]
    #[case("-5", None)]
    #[case("abc", None)]
    #[case("12.5", None)]
    fn validates_size_input(#[case] input: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_size_input(input), expected);
    }

    #[test]
    fn px_string_round_trips() {
        assert_eq!(px_string(24), "24px");
        assert_eq!(parse_px(&px_string(24)), Some(24));
    }

    #[test]
    fn absent_handle_reads_defaults() {
        let snapshot = FormatSnapshot::read(None);
        assert_eq!(snapshot, FormatSnapshot::default());
        assert_eq!(snapshot.value(FormatKind::TextColor), "#000000");
        assert_eq!(snapshot.value(FormatKind::LineHeight), "normal");
        assert_eq!(snapshot.value(FormatKind::FontSize), "16");
    }

    #[test]
    fn mixed_reading_displays_as_empty_string() {
        assert_eq!(FontSizeReading::Mixed.display(), "");
        assert_eq!(FontSizeReading::Px(24).display(), "24");
    }
}
