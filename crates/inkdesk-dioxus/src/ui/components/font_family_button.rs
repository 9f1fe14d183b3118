use dioxus::prelude::*;
use inkdesk_engine::Command;

use crate::ui::components::{Backdrop, EditorTooltip};
use crate::ui::constants::FONT_FAMILIES;
use crate::ui::store::use_editor_store;

/// Font family dropdown. Derives its state lazily: opening captures the
/// active family for entry highlighting, so a reopened menu reflects the
/// engine and nothing else.
#[component]
pub fn FontFamilyButton() -> Element {
    let store = use_editor_store();
    let mut open = use_signal(|| false);
    let mut active_value = use_signal(String::new);

    let current = store.snapshot().font_family;

    rsx! {
        div {
            class: "control",
            EditorTooltip {
                content: "Font Family",
                button {
                    class: if open() { "control-trigger control-wide is-active" } else { "control-trigger control-wide" },
                    onclick: move |_| {
                        if open() {
                            open.set(false);
                        } else {
                            active_value.set(store.snapshot().font_family);
                            open.set(true);
                        }
                    },
                    span { class: "truncate", "{current}" }
                    span { class: "chevron", "▾" }
                }
            }
            if open() {
                Backdrop { on_dismiss: move |_| open.set(false) }
                div {
                    class: "dropdown-menu",
                    for font in FONT_FAMILIES {
                        button {
                            class: if font.value == active_value() { "menu-entry is-selected" } else { "menu-entry" },
                            style: "font-family: {font.value};",
                            onclick: move |_| {
                                store.apply(Command::SetFontFamily(font.value.to_string()));
                                open.set(false);
                            },
                            "{font.label}"
                        }
                    }
                }
            }
        }
    }
}
