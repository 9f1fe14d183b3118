use dioxus::prelude::*;
use inkdesk_engine::{Alignment, Command};

use crate::ui::components::{Backdrop, EditorTooltip};
use crate::ui::store::use_editor_store;
use crate::ui::sync::{TRANSACTION_EVENTS, use_engine_revision};

fn alignment_glyph(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "⇤",
        Alignment::Center => "⇹",
        Alignment::Right => "⇥",
        Alignment::Justify => "☰",
    }
}

/// Alignment dropdown. The trigger icon is persistent visible state, so it
/// re-derives from the engine on every transaction.
#[component]
pub fn AlignButton() -> Element {
    let store = use_editor_store();
    let revision = use_engine_revision(TRANSACTION_EVENTS);
    let mut open = use_signal(|| false);

    let current = use_memo(move || {
        revision();
        store.snapshot().align
    });

    rsx! {
        div {
            class: "control",
            EditorTooltip {
                content: "Align",
                button {
                    class: if open() { "control-trigger is-active" } else { "control-trigger" },
                    onclick: move |_| open.toggle(),
                    span { class: "glyph", {alignment_glyph(current())} }
                    span { class: "chevron", "▾" }
                }
            }
            if open() {
                Backdrop { on_dismiss: move |_| open.set(false) }
                div {
                    class: "dropdown-menu dropdown-menu-row",
                    for alignment in Alignment::ALL {
                        EditorTooltip {
                            content: alignment.label().to_string(),
                            button {
                                class: if alignment == current() { "menu-entry is-selected" } else { "menu-entry" },
                                onclick: move |_| {
                                    store.apply(Command::SetAlign(alignment));
                                    open.set(false);
                                },
                                span { class: "glyph", {alignment_glyph(alignment)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alignment_has_a_distinct_glyph() {
        let glyphs: Vec<_> = Alignment::ALL.into_iter().map(alignment_glyph).collect();
        let mut deduped = glyphs.clone();
        deduped.dedup();
        assert_eq!(glyphs.len(), deduped.len());
    }
}
