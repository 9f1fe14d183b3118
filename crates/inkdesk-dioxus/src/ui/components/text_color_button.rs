use dioxus::prelude::*;
use inkdesk_engine::Command;

use crate::ui::components::ColorPicker;
use crate::ui::store::use_editor_store;

#[component]
pub fn TextColorButton() -> Element {
    let store = use_editor_store();
    let current_color = store.snapshot().text_color;

    rsx! {
        ColorPicker {
            tooltip: "Text color",
            glyph: "A",
            current_color,
            on_select: move |color: String| store.apply(Command::SetTextColor(color)),
        }
    }
}
