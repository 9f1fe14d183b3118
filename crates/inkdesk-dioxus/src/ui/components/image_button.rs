use dioxus::events::Key;
use dioxus::prelude::*;
use inkdesk_engine::Command;
use inkdesk_preview::probe_image;

use crate::ui::components::{Backdrop, EditorTooltip};
use crate::ui::store::use_editor_store;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "svg", "bmp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DialogStep {
    #[default]
    Input,
    Preview,
}

/// Image insertion: a two-entry menu (upload / by URL) plus a URL dialog
/// that load-checks before offering Insert. The upload path bypasses the
/// dialog entirely with a local file reference.
#[component]
pub fn ImageButton() -> Element {
    let store = use_editor_store();
    let mut menu_open = use_signal(|| false);
    let mut dialog_open = use_signal(|| false);
    let mut step = use_signal(DialogStep::default);
    let mut image_url = use_signal(String::new);
    let mut has_error = use_signal(|| false);
    let mut probing = use_signal(|| false);

    let mut reset_input_step = move || {
        step.set(DialogStep::Input);
        image_url.set(String::new());
        has_error.set(false);
    };

    let mut reset_dialog = move || {
        reset_input_step();
        dialog_open.set(false);
    };

    let mut try_load = move || {
        let url = image_url().trim().to_string();
        if url.is_empty() || probing() {
            return;
        }
        probing.set(true);
        spawn(async move {
            let loadable = probe_image(&url).await;
            probing.set(false);
            if loadable {
                has_error.set(false);
                step.set(DialogStep::Preview);
            } else {
                has_error.set(true);
                step.set(DialogStep::Input);
            }
        });
    };

    let on_upload = move |_| {
        menu_open.set(false);
        let picked = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file();
        let Some(path) = picked else {
            return;
        };
        // Local object reference; nothing is uploaded anywhere.
        store.apply(Command::SetImage {
            src: format!("file://{}", path.display()),
        });
    };

    rsx! {
        div {
            class: "control",
            EditorTooltip {
                content: "Insert image",
                button {
                    class: if menu_open() { "control-trigger is-active" } else { "control-trigger" },
                    onclick: move |_| menu_open.toggle(),
                    span { class: "glyph", "🖼" }
                }
            }
            if menu_open() {
                Backdrop { on_dismiss: move |_| menu_open.set(false) }
                div {
                    class: "dropdown-menu",
                    button {
                        class: "menu-entry",
                        onclick: on_upload,
                        "⇪ Upload from computer"
                    }
                    button {
                        class: "menu-entry",
                        onclick: move |_| {
                            reset_input_step();
                            menu_open.set(false);
                            dialog_open.set(true);
                        },
                        "🔗 By URL"
                    }
                }
            }
            if dialog_open() {
                Backdrop { dimmed: true, on_dismiss: move |_| reset_dialog() }
                div {
                    class: "image-dialog",
                    if step() == DialogStep::Preview {
                        div {
                            class: "image-preview",
                            button {
                                class: "dialog-close",
                                onclick: move |_| step.set(DialogStep::Input),
                                "✕"
                            }
                            img {
                                class: "image-preview-img",
                                src: "{image_url}",
                                alt: "Preview",
                            }
                            div {
                                class: "dialog-actions",
                                button {
                                    class: "dialog-button",
                                    onclick: move |_| reset_dialog(),
                                    "Cancel"
                                }
                                button {
                                    class: "dialog-button dialog-button-primary",
                                    onclick: move |_| {
                                        let src = image_url().trim().to_string();
                                        store.apply(Command::SetImage { src });
                                        reset_dialog();
                                    },
                                    "Insert"
                                }
                            }
                        }
                    } else {
                        div {
                            class: "image-input-step",
                            h3 { class: "dialog-title", "Insert image URL" }
                            input {
                                class: "link-input",
                                r#type: "text",
                                placeholder: "Paste URL of image...",
                                value: "{image_url}",
                                autofocus: true,
                                oninput: move |event| {
                                    image_url.set(event.value());
                                    has_error.set(false);
                                },
                                onkeydown: move |event| {
                                    if event.key() == Key::Enter {
                                        try_load();
                                    }
                                },
                            }
                            if has_error() {
                                p {
                                    class: "dialog-error",
                                    "We can't find or access the image at that URL."
                                }
                            }
                            p {
                                class: "dialog-hint",
                                "Only select images that you have confirmed you have the license to use."
                            }
                            div {
                                class: "dialog-actions",
                                button {
                                    class: "dialog-button",
                                    onclick: move |_| reset_dialog(),
                                    "Cancel"
                                }
                                button {
                                    class: "dialog-button dialog-button-primary",
                                    disabled: image_url().trim().is_empty() || probing(),
                                    onclick: move |_| try_load(),
                                    if probing() { "Checking..." } else { "Preview" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
