use dioxus::prelude::*;
use inkdesk_engine::Command;

use crate::ui::components::ColorPicker;
use crate::ui::store::use_editor_store;

#[component]
pub fn HighlightColorButton() -> Element {
    let store = use_editor_store();
    let current_color = store.snapshot().highlight_color;

    rsx! {
        ColorPicker {
            tooltip: "Highlight",
            glyph: "🖍",
            current_color,
            on_select: move |color: String| store.apply(Command::SetHighlight(color)),
            on_unset: Some(Callback::new(move |_: ()| store.apply(Command::UnsetHighlight))),
        }
    }
}
