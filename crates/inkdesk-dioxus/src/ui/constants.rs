//! Fixed option tables for the toolbar controls.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const FONT_FAMILIES: [FontOption; 5] = [
    FontOption { label: "Arial", value: "Arial, sans-serif" },
    FontOption { label: "Courier New", value: "Courier New, monospace" },
    FontOption { label: "Times New Roman", value: "Times New Roman, serif" },
    FontOption { label: "Georgia", value: "Georgia, serif" },
    FontOption { label: "Verdana", value: "Verdana, sans-serif" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingOption {
    pub label: &'static str,
    /// 0 means normal text.
    pub level: u8,
    /// Entry preview size inside the dropdown.
    pub font_size: &'static str,
}

pub const HEADINGS: [HeadingOption; 4] = [
    HeadingOption { label: "Normal text", level: 0, font_size: "16px" },
    HeadingOption { label: "Heading 1", level: 1, font_size: "32px" },
    HeadingOption { label: "Heading 2", level: 2, font_size: "24px" },
    HeadingOption { label: "Heading 3", level: 3, font_size: "20px" },
];

pub const FONT_SIZE_PRESETS: [u32; 10] = [8, 9, 10, 11, 12, 14, 18, 24, 36, 48];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub hex: &'static str,
    pub name: &'static str,
}

/// Ten-column swatch grid in the Docs tradition: grays, saturated hues,
/// then their light variants.
pub const PALETTE: [Swatch; 30] = [
    Swatch { hex: "#000000", name: "Black" },
    Swatch { hex: "#434343", name: "Dark gray 4" },
    Swatch { hex: "#666666", name: "Dark gray 3" },
    Swatch { hex: "#999999", name: "Dark gray 2" },
    Swatch { hex: "#b7b7b7", name: "Dark gray 1" },
    Swatch { hex: "#cccccc", name: "Gray" },
    Swatch { hex: "#d9d9d9", name: "Light gray 1" },
    Swatch { hex: "#efefef", name: "Light gray 2" },
    Swatch { hex: "#f3f3f3", name: "Light gray 3" },
    Swatch { hex: "#ffffff", name: "White" },
    Swatch { hex: "#980000", name: "Dark red berry" },
    Swatch { hex: "#ff0000", name: "Red" },
    Swatch { hex: "#ff9900", name: "Orange" },
    Swatch { hex: "#ffff00", name: "Yellow" },
    Swatch { hex: "#00ff00", name: "Green" },
    Swatch { hex: "#00ffff", name: "Cyan" },
    Swatch { hex: "#4a86e8", name: "Cornflower blue" },
    Swatch { hex: "#0000ff", name: "Blue" },
    Swatch { hex: "#9900ff", name: "Purple" },
    Swatch { hex: "#ff00ff", name: "Magenta" },
    Swatch { hex: "#e6b8af", name: "Light red berry" },
    Swatch { hex: "#f4cccc", name: "Light red" },
    Swatch { hex: "#fce5cd", name: "Light orange" },
    Swatch { hex: "#fff2cc", name: "Light yellow" },
    Swatch { hex: "#d9ead3", name: "Light green" },
    Swatch { hex: "#d0e0e3", name: "Light cyan" },
    Swatch { hex: "#c9daf8", name: "Light cornflower" },
    Swatch { hex: "#cfe2f3", name: "Light blue" },
    Swatch { hex: "#d9d2e9", name: "Light purple" },
    Swatch { hex: "#ead1dc", name: "Light magenta" },
];
