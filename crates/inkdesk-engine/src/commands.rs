use crate::types::{Alignment, LineHeight};

/// Mutations the toolbar issues against the engine. Every command maps to
/// one engine-side transaction; the engine owns the document model and the
/// undo stack, so commands carry values, never document positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    ToggleTaskList,
    ToggleBulletList,
    ToggleOrderedList,
    Undo,
    Redo,
    UnsetAllMarks,
    SetFontFamily(String),
    /// Size in bare pixels; transmitted to the engine in its canonical
    /// `"{n}px"` form.
    SetFontSize(u32),
    SetTextColor(String),
    SetHighlight(String),
    UnsetHighlight,
    /// Level 1..=3. Level 0 is expressed as `SetParagraph`.
    SetHeading(u8),
    SetParagraph,
    SetAlign(Alignment),
    SetLineHeight(LineHeight),
    SetLink { href: String },
    UnsetLink,
    SetImage { src: String },
}
