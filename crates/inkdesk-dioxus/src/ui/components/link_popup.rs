use std::cell::Cell;
use std::rc::Rc;

use dioxus::events::Key;
use dioxus::prelude::*;
use inkdesk_preview::{LinkPreview, derive_title, normalize_url};

use crate::ui::app::PreviewSettings;
use crate::ui::components::{Backdrop, FaviconIcon};

/// Floating annotation card for a clicked link: resolved metadata,
/// copy/edit/remove actions, and an edit-in-place input.
///
/// The metadata fetch starts on mount; its result is applied only if this
/// popup instance is still mounted, so a late arrival can never clobber a
/// reopened popup. A pointer-down outside the card closes it
/// unconditionally, discarding any edit draft.
#[component]
pub fn LinkPopup(
    href: String,
    top: f64,
    left: f64,
    on_close: EventHandler<()>,
    on_edit_link: EventHandler<String>,
    on_remove_link: EventHandler<()>,
) -> Element {
    let settings = use_context::<PreviewSettings>();
    let mut editing = use_signal(|| false);
    let mut input = use_signal({
        let href = href.clone();
        move || href
    });
    let mut preview = use_signal(|| None::<LinkPreview>);
    let mut loading = use_signal(|| true);

    // Manual liveness token captured at fetch start (there is no network
    // cancellation; a stale result is simply discarded).
    let alive = use_hook(|| Rc::new(Cell::new(true)));
    use_drop({
        let alive = alive.clone();
        move || alive.set(false)
    });

    use_hook({
        let href = href.clone();
        let alive = alive.clone();
        let client = settings.client.clone();
        move || {
            spawn(async move {
                let resolved = client.resolve(&href).await;
                if alive.get() {
                    preview.set(Some(resolved));
                    loading.set(false);
                }
            });
        }
    });

    let submit = {
        let href = href.clone();
        move || {
            if let Some(new_href) = edited_href(&input(), &href) {
                on_edit_link.call(new_href);
            }
            editing.set(false);
            on_close.call(());
        }
    };
    let mut submit_key = submit.clone();
    let mut submit_click = submit;

    let resolved = preview();
    let derived_title = resolved
        .as_ref()
        .and_then(|p| derive_title(&p.title, &href));
    let title_text = derived_title.clone().unwrap_or_else(|| href.clone());
    // Image and description extend the card only together.
    let extended = resolved
        .as_ref()
        .filter(|p| !p.image.is_empty() && !p.description.is_empty())
        .cloned();

    let href_for_open = href.clone();
    let href_for_copy = href.clone();
    let href_for_edit = href.clone();

    rsx! {
        Backdrop { on_dismiss: move |_| on_close.call(()) }
        div {
            class: "link-popup",
            style: "top: {top}px; left: {left}px;",
            if editing() {
                div {
                    class: "popup-edit-row",
                    input {
                        class: "link-input",
                        r#type: "text",
                        value: "{input}",
                        autofocus: true,
                        oninput: move |event| input.set(event.value()),
                        onkeydown: move |event| {
                            match event.key() {
                                Key::Enter => submit_key(),
                                Key::Escape => {
                                    editing.set(false);
                                    on_close.call(());
                                }
                                _ => {}
                            }
                        },
                    }
                    button {
                        class: "icon-button",
                        onclick: move |_| submit_click(),
                        "✎"
                    }
                }
            } else {
                div {
                    class: "popup-body",
                    div {
                        class: "popup-header",
                        div {
                            class: "popup-favicon",
                            if loading() {
                                div { class: "spinner" }
                            } else {
                                FaviconIcon { href: href.clone(), preview: resolved.clone() }
                            }
                        }
                        div {
                            class: "popup-title-block",
                            button {
                                class: "popup-title",
                                onclick: move |_| {
                                    if let Err(err) = open_url(&href_for_open) {
                                        log::warn!("failed to open {href_for_open}: {err}");
                                    }
                                    on_close.call(());
                                },
                                "{title_text}"
                            }
                            if derived_title.is_some() {
                                span { class: "popup-href", "{href}" }
                            }
                        }
                        div {
                            class: "popup-actions",
                            button {
                                class: "icon-button",
                                title: "Copy link",
                                onclick: move |_| {
                                    copy_to_clipboard(&href_for_copy);
                                    on_close.call(());
                                },
                                "⧉"
                            }
                            button {
                                class: "icon-button",
                                title: "Edit link",
                                onclick: move |_| {
                                    input.set(href_for_edit.clone());
                                    editing.set(true);
                                },
                                "✎"
                            }
                            button {
                                class: "icon-button",
                                title: "Remove link",
                                onclick: move |_| {
                                    on_remove_link.call(());
                                    on_close.call(());
                                },
                                "⊘"
                            }
                        }
                    }
                    if let Some(extended) = extended {
                        img {
                            class: "popup-preview-image",
                            src: "{extended.image}",
                            alt: "preview",
                        }
                        div {
                            class: "popup-description",
                            span { class: "glyph", "☰" }
                            p { "{extended.description}" }
                        }
                    }
                }
            }
        }
    }
}

/// Href to forward on submit: normalized, and only when it actually
/// changed. `None` forwards nothing (empty or unchanged input).
fn edited_href(input: &str, current: &str) -> Option<String> {
    let normalized = normalize_url(input)?;
    (normalized != current).then_some(normalized)
}

fn copy_to_clipboard(text: &str) {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    if let Err(err) = result {
        log::warn!("clipboard copy failed: {err}");
    }
}

fn open_url(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::edited_href;
    use pretty_assertions::assert_eq;

    #[test]
    fn schemeless_input_is_normalized_before_forwarding() {
        assert_eq!(
            edited_href("example.com", "https://old.example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn unchanged_href_forwards_nothing() {
        assert_eq!(edited_href("https://example.com", "https://example.com"), None);
        // Normalization can make raw input equal to the current href too.
        assert_eq!(edited_href("example.com", "https://example.com"), None);
    }

    #[test]
    fn empty_input_forwards_nothing() {
        assert_eq!(edited_href("", "https://example.com"), None);
        assert_eq!(edited_href("   ", "https://example.com"), None);
    }
}
