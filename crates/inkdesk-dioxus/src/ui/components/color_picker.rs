use dioxus::prelude::*;

use crate::ui::components::{Backdrop, EditorTooltip};
use crate::ui::constants::PALETTE;

/// Color picker states: the swatch palette anchors to the trigger, the
/// custom editor is a detached centered overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PickerState {
    #[default]
    Closed,
    Palette,
    Custom,
}

/// Webview-side system color sampling. Resolves to the sampled hex, or
/// null when the capability is missing or the user bails out.
const EYEDROPPER_JS: &str = r#"
if (!window.EyeDropper) { return null; }
try {
    const result = await new EyeDropper().open();
    return result.sRGBHex;
} catch (err) {
    return null;
}
"#;

/// Color the custom dialog emits on close. Cancel confirms nothing, so an
/// adjusted draft never leaks into the applied color.
fn confirmed_color(confirmed: bool, draft: &str) -> Option<String> {
    (confirmed && !draft.is_empty()).then(|| draft.to_string())
}

/// Shared swatch-palette + custom-color control behind the text color and
/// highlight buttons.
#[component]
pub fn ColorPicker(
    tooltip: String,
    glyph: String,
    current_color: String,
    on_select: EventHandler<String>,
    on_unset: Option<Callback<()>>,
    #[props(default = "CUSTOM".to_string())] custom_label: String,
) -> Element {
    let mut state = use_signal(PickerState::default);
    let mut draft = use_signal(String::new);

    let sample_color = move |_| {
        spawn(async move {
            match document::eval(EYEDROPPER_JS).await {
                Ok(value) => {
                    if let Some(hex) = value.as_str() {
                        draft.set(hex.to_lowercase());
                    }
                    // null: unsupported or dismissed; the draft stays put.
                }
                Err(err) => log::warn!("color sampling unavailable: {err:?}"),
            }
        });
    };

    let trigger_color = current_color.clone();
    let seed = current_color.clone();

    rsx! {
        div {
            class: "control",
            EditorTooltip {
                content: tooltip.clone(),
                button {
                    class: if state() == PickerState::Palette { "control-trigger color-trigger is-active" } else { "control-trigger color-trigger" },
                    onclick: move |_| {
                        let next = if state() == PickerState::Palette {
                            PickerState::Closed
                        } else {
                            PickerState::Palette
                        };
                        state.set(next);
                    },
                    span { class: "glyph", "{glyph}" }
                    div {
                        class: "color-underline",
                        style: "background-color: {trigger_color};",
                    }
                }
            }
            if state() == PickerState::Palette {
                Backdrop { on_dismiss: move |_| state.set(PickerState::Closed) }
                div {
                    class: "dropdown-menu color-menu",
                    if let Some(unset) = on_unset {
                        button {
                            class: "menu-entry unset-entry",
                            onclick: move |_| {
                                unset.call(());
                                state.set(PickerState::Closed);
                            },
                            span { class: "glyph", "⊘" }
                            span { "None" }
                        }
                    }
                    div {
                        class: "swatch-grid",
                        for swatch in PALETTE {
                            button {
                                class: "swatch",
                                title: "{swatch.name}",
                                style: "background-color: {swatch.hex};",
                                onclick: move |_| {
                                    on_select.call(swatch.hex.to_string());
                                    state.set(PickerState::Closed);
                                },
                            }
                        }
                    }
                    button {
                        class: "menu-entry custom-entry",
                        onclick: move |_| {
                            draft.set(seed.clone());
                            state.set(PickerState::Custom);
                        },
                        "{custom_label}"
                    }
                }
            }
            if state() == PickerState::Custom {
                Backdrop {
                    dimmed: true,
                    on_dismiss: move |_| state.set(PickerState::Closed),
                }
                div {
                    class: "color-dialog",
                    div {
                        class: "color-dialog-inputs",
                        input {
                            class: "color-wheel",
                            r#type: "color",
                            value: "{draft}",
                            oninput: move |event| draft.set(event.value()),
                        }
                        input {
                            class: "hex-input",
                            r#type: "text",
                            value: "{draft}",
                            oninput: move |event| draft.set(event.value()),
                        }
                        EditorTooltip {
                            content: "Pick from screen",
                            button {
                                class: "control-trigger eyedropper",
                                onclick: sample_color,
                                "💧"
                            }
                        }
                    }
                    div {
                        class: "dialog-actions",
                        button {
                            class: "dialog-button",
                            // Discards the draft: nothing is confirmed.
                            onclick: move |_| state.set(PickerState::Closed),
                            "Cancel"
                        }
                        button {
                            class: "dialog-button dialog-button-primary",
                            onclick: move |_| {
                                if let Some(color) = confirmed_color(true, &draft()) {
                                    on_select.call(color);
                                }
                                state.set(PickerState::Closed);
                            },
                            "OK"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::confirmed_color;
    use pretty_assertions::assert_eq;

    #[test]
    fn cancel_confirms_nothing() {
        assert_eq!(confirmed_color(false, "#ff0000"), None);
    }

    #[test]
    fn ok_confirms_a_non_empty_draft() {
        assert_eq!(confirmed_color(true, "#ff0000"), Some("#ff0000".to_string()));
        assert_eq!(confirmed_color(true, ""), None);
    }
}
