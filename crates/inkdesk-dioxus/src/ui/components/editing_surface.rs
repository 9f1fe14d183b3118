use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use inkdesk_engine::stub::StubEngine;
use inkdesk_engine::{
    DEFAULT_HIGHLIGHT_COLOR, EditorHandle, FontSizeReading, FormatSnapshot, TextEngine,
};

use crate::ui::store::use_editor_store;
use crate::ui::sync::{TRANSACTION_EVENTS, use_engine_revision};

/// Screen position a link popup mounts at, captured from the click.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupAnchor {
    pub href: String,
    pub top: f64,
    pub left: f64,
}

/// The page that hosts the engine.
///
/// This component owns the engine instance for its lifetime: the handle is
/// published to the store once the surface is up and revoked on teardown,
/// which is the only place the store is ever written. The rendered page is
/// a stand-in that mirrors the current formatting snapshot until real
/// engine bindings replace the stub.
#[component]
pub fn EditingSurface(on_link_click: EventHandler<PopupAnchor>) -> Element {
    let mut store = use_editor_store();
    let engine = use_hook(|| {
        let engine: Rc<RefCell<dyn TextEngine>> = Rc::new(RefCell::new(StubEngine::new()));
        engine
    });

    use_effect({
        let engine = engine.clone();
        move || store.set(EditorHandle::new(&engine))
    });
    use_drop(move || store.clear());

    let revision = use_engine_revision(TRANSACTION_EVENTS);
    let snapshot = use_memo(move || {
        revision();
        store.snapshot()
    });

    let current = snapshot();
    let style = sample_text_style(&current);

    rsx! {
        div {
            class: "surface-scroll",
            div {
                id: "editing-surface",
                class: "page",
                tabindex: "0",
                p {
                    class: "sample-text",
                    style: "{style}",
                    "The quick brown fox jumps over the lazy dog."
                }
                if let Some((href, label)) = current.link_href.clone().map(|h| (h.clone(), h)) {
                    p {
                        a {
                            class: "doc-link",
                            href: "#",
                            onclick: move |event: Event<MouseData>| {
                                event.prevent_default();
                                event.stop_propagation();
                                let point = event.page_coordinates();
                                on_link_click.call(PopupAnchor {
                                    href: href.clone(),
                                    top: point.y + 18.0,
                                    left: point.x,
                                });
                            },
                            "{label}"
                        }
                    }
                }
                if let Some(src) = current.image_src.clone() {
                    img { class: "doc-image", src: "{src}" }
                }
            }
        }
    }
}

/// Inline style mirroring the snapshot, so formatting commands are visible
/// without a document renderer.
fn sample_text_style(snapshot: &FormatSnapshot) -> String {
    let size = match snapshot.font_size {
        FontSizeReading::Px(size) => size,
        FontSizeReading::Mixed => inkdesk_engine::DEFAULT_FONT_SIZE_PX,
    };
    let mut style = format!(
        "font-family: {}; font-size: {}px; color: {}; text-align: {}; line-height: {};",
        snapshot.font_family,
        size,
        snapshot.text_color,
        snapshot.align.as_str(),
        snapshot.line_height.css_value(),
    );
    if snapshot.bold {
        style.push_str(" font-weight: bold;");
    }
    if snapshot.italic {
        style.push_str(" font-style: italic;");
    }
    if snapshot.underline {
        style.push_str(" text-decoration: underline;");
    }
    if snapshot.highlight_color != DEFAULT_HIGHLIGHT_COLOR {
        style.push_str(&format!(" background-color: {};", snapshot.highlight_color));
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkdesk_engine::Alignment;

    #[test]
    fn style_tracks_the_snapshot() {
        let snapshot = FormatSnapshot {
            bold: true,
            align: Alignment::Center,
            font_size: FontSizeReading::Px(24),
            ..Default::default()
        };
        let style = sample_text_style(&snapshot);
        assert!(style.contains("font-size: 24px;"));
        assert!(style.contains("text-align: center;"));
        assert!(style.contains("font-weight: bold;"));
        assert!(!style.contains("background-color"));
    }

    #[test]
    fn mixed_size_falls_back_to_the_default_for_display() {
        let snapshot = FormatSnapshot {
            font_size: FontSizeReading::Mixed,
            ..Default::default()
        };
        assert!(sample_text_style(&snapshot).contains("font-size: 16px;"));
    }
}
