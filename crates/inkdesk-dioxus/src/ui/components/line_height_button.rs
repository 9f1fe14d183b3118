use dioxus::prelude::*;
use inkdesk_engine::{Command, LineHeight};

use crate::ui::components::{Backdrop, EditorTooltip};
use crate::ui::store::use_editor_store;
use crate::ui::sync::{TRANSACTION_EVENTS, use_engine_revision};

#[component]
pub fn LineHeightButton() -> Element {
    let store = use_editor_store();
    let revision = use_engine_revision(TRANSACTION_EVENTS);
    let mut open = use_signal(|| false);

    let current = use_memo(move || {
        revision();
        store.snapshot().line_height
    });

    rsx! {
        div {
            class: "control",
            EditorTooltip {
                content: "Line height",
                button {
                    class: if open() { "control-trigger is-active" } else { "control-trigger" },
                    "aria-label": "Change line height",
                    onclick: move |_| open.toggle(),
                    span { class: "glyph", "↕" }
                    span { class: "chevron", "▾" }
                }
            }
            if open() {
                Backdrop { on_dismiss: move |_| open.set(false) }
                div {
                    class: "dropdown-menu",
                    for line_height in LineHeight::ALL {
                        button {
                            class: if line_height == current() { "menu-entry is-selected" } else { "menu-entry" },
                            onclick: move |_| {
                                store.apply(Command::SetLineHeight(line_height));
                                open.set(false);
                            },
                            {line_height.label()}
                        }
                    }
                }
            }
        }
    }
}
