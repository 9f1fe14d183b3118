use dioxus::prelude::*;
use inkdesk_engine::{Command, ListKind};

use crate::ui::components::{Backdrop, EditorTooltip};
use crate::ui::store::use_editor_store;
use crate::ui::sync::{TRANSACTION_EVENTS, use_engine_revision};

const LIST_OPTIONS: [(ListKind, &str); 2] =
    [(ListKind::Bullet, "•"), (ListKind::Ordered, "1.")];

fn list_command(kind: ListKind) -> Command {
    match kind {
        ListKind::Bullet => Command::ToggleBulletList,
        ListKind::Ordered => Command::ToggleOrderedList,
    }
}

/// List-type dropdown; the trigger shows the list kind at the selection
/// (bullet when the selection is not in a list).
#[component]
pub fn ListButton() -> Element {
    let store = use_editor_store();
    let revision = use_engine_revision(TRANSACTION_EVENTS);
    let mut open = use_signal(|| false);

    let current = use_memo(move || {
        revision();
        store.snapshot().list
    });

    let trigger_glyph = LIST_OPTIONS
        .iter()
        .find(|(kind, _)| Some(*kind) == current())
        .map(|(_, glyph)| *glyph)
        .unwrap_or("•");

    rsx! {
        div {
            class: "control",
            EditorTooltip {
                content: "List Type",
                button {
                    class: if open() { "control-trigger is-active" } else { "control-trigger" },
                    onclick: move |_| open.toggle(),
                    span { class: "glyph", "{trigger_glyph}" }
                    span { class: "chevron", "▾" }
                }
            }
            if open() {
                Backdrop { on_dismiss: move |_| open.set(false) }
                div {
                    class: "dropdown-menu dropdown-menu-row",
                    for (kind, glyph) in LIST_OPTIONS {
                        EditorTooltip {
                            content: kind.label().to_string(),
                            button {
                                class: if Some(kind) == current() { "menu-entry is-selected" } else { "menu-entry" },
                                onclick: move |_| {
                                    store.apply(list_command(kind));
                                    open.set(false);
                                },
                                span { class: "glyph", "{glyph}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
