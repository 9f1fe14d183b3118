use dioxus::prelude::*;
use inkdesk_preview::{LinkPreview, favicon_src};

use crate::ui::app::PreviewSettings;

/// Favicon-or-globe glyph for a link. The globe shows when the href or its
/// domain is implausible, when the preview looks like a placeholder, or
/// when the favicon image itself fails to load.
#[component]
pub fn FaviconIcon(href: String, preview: Option<LinkPreview>) -> Element {
    let settings = use_context::<PreviewSettings>();
    let mut broken = use_signal(|| false);

    let resolved = preview.unwrap_or_default();
    let src = if broken() {
        None
    } else {
        favicon_src(&href, &resolved, &settings.favicon_endpoint)
    };

    match src {
        Some(src) => rsx! {
            img {
                class: "favicon",
                src: "{src}",
                alt: "favicon",
                onerror: move |_| broken.set(true),
            }
        },
        None => rsx! {
            span { class: "favicon favicon-globe", "🌐" }
        },
    }
}
