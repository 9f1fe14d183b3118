use std::collections::HashMap;

/// Attribute maps exchanged with the engine. Values are the engine's
/// canonical string forms (CSS-ish: `"24px"`, `"#ff0000"`, `"center"`).
pub type AttrMap = HashMap<String, String>;

/// Attribute keys used by the formatting kinds this UI drives.
pub mod attr {
    pub const FONT_FAMILY: &str = "fontFamily";
    pub const FONT_SIZE: &str = "fontSize";
    pub const COLOR: &str = "color";
    pub const LEVEL: &str = "level";
    pub const ALIGN: &str = "align";
    pub const LINE_HEIGHT: &str = "lineHeight";
    pub const HREF: &str = "href";
    pub const SRC: &str = "src";
}

/// The closed set of formatting kinds the toolbar can query and mutate.
/// Unsupported kinds are unrepresentable rather than stringly-typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Bold,
    Italic,
    Underline,
    TaskList,
    FontFamily,
    FontSize,
    TextColor,
    Highlight,
    Heading,
    Align,
    BulletList,
    OrderedList,
    LineHeight,
    Link,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub const ALL: [Alignment; 4] = [
        Alignment::Left,
        Alignment::Center,
        Alignment::Right,
        Alignment::Justify,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Alignment::Left => "Align Left",
            Alignment::Center => "Align Center",
            Alignment::Right => "Align Right",
            Alignment::Justify => "Align Justify",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineHeight {
    #[default]
    Normal,
    Single,
    OneAndHalf,
    Double,
}

impl LineHeight {
    pub const ALL: [LineHeight; 4] = [
        LineHeight::Normal,
        LineHeight::Single,
        LineHeight::OneAndHalf,
        LineHeight::Double,
    ];

    /// The canonical value exchanged with the engine.
    pub fn css_value(&self) -> &'static str {
        match self {
            LineHeight::Normal => "normal",
            LineHeight::Single => "1",
            LineHeight::OneAndHalf => "1.5",
            LineHeight::Double => "2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineHeight::Normal => "Default",
            LineHeight::Single => "Single",
            LineHeight::OneAndHalf => "1.5",
            LineHeight::Double => "Double",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lh| lh.css_value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Bullet => "Bulleted List",
            ListKind::Ordered => "Ordered List",
        }
    }
}

/// Byte-offset selection range inside the engine's document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub from: usize,
    pub to: usize,
}

impl Selection {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn is_caret(&self) -> bool {
        self.from == self.to
    }
}

/// Font size at the current selection. `Mixed` means the selection spans
/// more than one size; the display layer renders it as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSizeReading {
    Px(u32),
    Mixed,
}

impl FontSizeReading {
    pub fn display(&self) -> String {
        match self {
            FontSizeReading::Px(size) => size.to_string(),
            FontSizeReading::Mixed => String::new(),
        }
    }
}
