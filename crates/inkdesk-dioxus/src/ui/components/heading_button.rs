use dioxus::prelude::*;
use inkdesk_engine::Command;

use crate::ui::components::{Backdrop, EditorTooltip};
use crate::ui::constants::HEADINGS;
use crate::ui::store::use_editor_store;

fn heading_label(level: u8) -> &'static str {
    HEADINGS
        .iter()
        .find(|option| option.level == level)
        .map(|option| option.label)
        .unwrap_or("Normal text")
}

/// Paragraph-style dropdown: normal text plus heading levels 1..=3.
#[component]
pub fn HeadingButton() -> Element {
    let store = use_editor_store();
    let mut open = use_signal(|| false);
    let mut active_level = use_signal(|| 0u8);

    let current = heading_label(store.snapshot().heading_level);

    rsx! {
        div {
            class: "control",
            EditorTooltip {
                content: "Styles",
                button {
                    class: if open() { "control-trigger control-wide is-active" } else { "control-trigger control-wide" },
                    onclick: move |_| {
                        if open() {
                            open.set(false);
                        } else {
                            active_level.set(store.snapshot().heading_level);
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
                    for option in HEADINGS {
                        button {
                            class: if option.level == active_level() { "menu-entry is-selected" } else { "menu-entry" },
                            style: "font-size: {option.font_size};",
                            onclick: move |_| {
                                let command = if option.level == 0 {
                                    Command::SetParagraph
                                } else {
                                    Command::SetHeading(option.level)
                                };
                                store.apply(command);
                                open.set(false);
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::heading_label;

    #[test]
    fn labels_cover_all_levels() {
        assert_eq!(heading_label(0), "Normal text");
        assert_eq!(heading_label(2), "Heading 2");
        // Unknown levels read as normal text rather than panicking.
        assert_eq!(heading_label(9), "Normal text");
    }
}
