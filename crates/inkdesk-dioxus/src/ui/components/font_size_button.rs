use dioxus::events::Key;
use dioxus::prelude::*;
use inkdesk_engine::{Command, DEFAULT_FONT_SIZE_PX, parse_size_input};

use crate::ui::components::{Backdrop, EditorTooltip};
use crate::ui::constants::FONT_SIZE_PRESETS;
use crate::ui::store::use_editor_store;
use crate::ui::sync::{SELECTION_EVENTS, use_engine_revision};

/// Size after a ±1 step from the displayed value. The blank mixed display
/// steps from the default; a step to zero fails validation and is dropped.
fn stepped_size(display: &str, delta: i64) -> Option<u32> {
    let current = display
        .trim()
        .parse::<i64>()
        .unwrap_or(i64::from(DEFAULT_FONT_SIZE_PX));
    u32::try_from(current + delta).ok().filter(|size| *size > 0)
}

/// Font size control: a display/editing flip plus an independent preset
/// dropdown. The displayed size re-derives from the engine on every
/// selection or document change — except mid-edit, where the draft wins.
#[component]
pub fn FontSizeButton() -> Element {
    let store = use_editor_store();
    let revision = use_engine_revision(SELECTION_EVENTS);
    let mut editing = use_signal(|| false);
    let mut dropdown_visible = use_signal(|| false);
    let mut size_display = use_signal(|| DEFAULT_FONT_SIZE_PX.to_string());
    let mut input = use_signal(|| DEFAULT_FONT_SIZE_PX.to_string());

    use_effect(move || {
        revision();
        if editing() {
            return;
        }
        // Mixed selections come back as the empty string.
        let display = store.snapshot().font_size.display();
        size_display.set(display.clone());
        input.set(display);
    });

    let mut apply_size = move |raw: String| {
        if let Some(size) = parse_size_input(&raw) {
            store.apply(Command::SetFontSize(size));
            size_display.set(size.to_string());
            input.set(size.to_string());
            editing.set(false);
            dropdown_visible.set(false);
        }
    };

    let mut abort_edit = move || {
        editing.set(false);
        dropdown_visible.set(false);
        input.set(size_display());
    };

    rsx! {
        div {
            class: "control font-size-control",
            EditorTooltip {
                content: "Decrease font size",
                button {
                    class: "control-trigger step-button",
                    onclick: move |_| {
                        if let Some(size) = stepped_size(&size_display(), -1) {
                            apply_size(size.to_string());
                        }
                    },
                    "−"
                }
            }
            if editing() {
                input {
                    class: "size-input",
                    r#type: "text",
                    value: "{input}",
                    autofocus: true,
                    oninput: move |event| input.set(event.value()),
                    onkeydown: move |event| {
                        match event.key() {
                            Key::Enter => apply_size(input()),
                            Key::Escape => abort_edit(),
                            _ => {}
                        }
                    },
                }
            } else {
                EditorTooltip {
                    content: "Font size",
                    button {
                        class: "size-display",
                        onclick: move |_| {
                            input.set(size_display());
                            editing.set(true);
                            dropdown_visible.set(true);
                        },
                        "{size_display}"
                    }
                }
            }
            EditorTooltip {
                content: "Increase font size",
                button {
                    class: "control-trigger step-button",
                    onclick: move |_| {
                        if let Some(size) = stepped_size(&size_display(), 1) {
                            apply_size(size.to_string());
                        }
                    },
                    "+"
                }
            }
            if editing() || dropdown_visible() {
                Backdrop { on_dismiss: move |_| abort_edit() }
            }
            if dropdown_visible() {
                ul {
                    class: "dropdown-menu size-menu",
                    for preset in FONT_SIZE_PRESETS {
                        li {
                            class: if size_display() == preset.to_string() { "menu-entry is-selected" } else { "menu-entry" },
                            onclick: move |_| apply_size(preset.to_string()),
                            "{preset}"
                        }
                    }
                }
            }
        }
    }
}
