//! Server-side render smoke tests: the component tree must mount without
//! an engine (defaults everywhere) and produce the expected chrome.

use dioxus::prelude::*;
use inkdesk_config::Config;
use inkdesk_dioxus::ui::{App, PreviewSettings};
use inkdesk_dioxus::ui::components::LinkPopup;
use inkdesk_preview::PreviewClient;

fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn app_root() -> Element {
    rsx! {
        App { config: Config::default() }
    }
}

fn popup_root() -> Element {
    use_context_provider(|| PreviewSettings {
        client: PreviewClient::new("http://127.0.0.1:1/preview"),
        favicon_endpoint: "http://127.0.0.1:1/favicons".to_string(),
    });

    rsx! {
        LinkPopup {
            href: "https://example.com/article",
            top: 120.0,
            left: 80.0,
            on_close: move |_| {},
            on_edit_link: move |_new_href: String| {},
            on_remove_link: move |_| {},
        }
    }
}

#[test]
fn app_renders_toolbar_and_surface_without_an_engine() {
    let html = render(app_root);

    // Toolbar chrome with default-derived control labels.
    assert!(html.contains("toolbar"));
    assert!(html.contains("Arial, sans-serif"));
    assert!(html.contains("Normal text"));
    assert!(html.contains("data-tooltip"));

    // The surface stand-in page is present and addressable.
    assert!(html.contains("editing-surface"));
    assert!(html.contains("The quick brown fox"));

    // No engine yet: no link in the document, so no popup trigger.
    assert!(!html.contains("link-popup"));
}

#[test]
fn app_defaults_show_the_default_font_size() {
    let html = render(app_root);
    assert!(html.contains("size-display"));
    assert!(html.contains(">16<"));
}

#[test]
fn link_popup_starts_in_viewing_state_with_a_loading_indicator() {
    let html = render(popup_root);

    assert!(html.contains("link-popup"));
    // Fetch not settled at first paint: spinner in the favicon slot.
    assert!(html.contains("spinner"));
    // No derived title yet, so the raw URL is the title and there is no
    // secondary href line.
    assert!(html.contains("https://example.com/article"));
    assert!(!html.contains("popup-href"));
    // Actions stay available while loading.
    assert!(html.contains("Copy link"));
    assert!(html.contains("Edit link"));
    assert!(html.contains("Remove link"));
    // Positioned at its anchor, with the outside-click layer mounted.
    assert!(html.contains("top: 120px"));
    assert!(html.contains("backdrop"));
}
