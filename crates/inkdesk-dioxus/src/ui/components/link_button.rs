use dioxus::events::Key;
use dioxus::prelude::*;
use inkdesk_engine::Command;
use inkdesk_preview::normalize_url;

use crate::ui::components::{Backdrop, EditorTooltip};
use crate::ui::store::use_editor_store;

/// Inline link-apply form. Opening seeds the buffer with the selection's
/// current link target; submitting normalizes (default scheme) and applies.
#[component]
pub fn LinkButton() -> Element {
    let store = use_editor_store();
    let mut open = use_signal(|| false);
    let mut value = use_signal(String::new);

    let link_active = store.snapshot().link_href.is_some();

    let mut apply = move || {
        if let Some(href) = normalize_url(&value()) {
            store.apply(Command::SetLink { href });
        }
        value.set(String::new());
        open.set(false);
    };

    rsx! {
        div {
            class: "control",
            EditorTooltip {
                content: "Insert link",
                button {
                    class: if link_active || open() { "control-trigger is-active" } else { "control-trigger" },
                    onclick: move |_| {
                        if open() {
                            open.set(false);
                        } else {
                            value.set(store.snapshot().link_href.unwrap_or_default());
                            open.set(true);
                        }
                    },
                    span { class: "glyph", "🔗" }
                }
            }
            if open() {
                Backdrop { on_dismiss: move |_| open.set(false) }
                div {
                    class: "dropdown-menu link-menu",
                    input {
                        class: "link-input",
                        r#type: "text",
                        placeholder: "Paste or type a link...",
                        value: "{value}",
                        autofocus: true,
                        oninput: move |event| value.set(event.value()),
                        onkeydown: move |event| {
                            if event.key() == Key::Enter {
                                apply();
                            }
                        },
                    }
                    button {
                        class: "dialog-button dialog-button-primary",
                        onclick: move |_| apply(),
                        "Apply"
                    }
                }
            }
        }
    }
}
