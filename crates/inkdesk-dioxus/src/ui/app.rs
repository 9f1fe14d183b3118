use dioxus::prelude::*;
use inkdesk_config::Config;
use inkdesk_engine::Command;
use inkdesk_preview::PreviewClient;

use crate::ui::components::{EditingSurface, LinkPopup, PopupAnchor, Toolbar};
use crate::ui::store::EditorStore;

const EDITOR_CSS: &str = include_str!("../../assets/editor.css");

/// Link-preview plumbing shared by the popup and the favicon component.
#[derive(Clone)]
pub struct PreviewSettings {
    pub client: PreviewClient,
    pub favicon_endpoint: String,
}

#[component]
pub fn App(config: Config) -> Element {
    let store = EditorStore::provide();
    use_context_provider({
        let config = config.clone();
        move || PreviewSettings {
            client: PreviewClient::new(config.preview_endpoint.clone()),
            favicon_endpoint: config.favicon_endpoint.clone(),
        }
    });
    use_context_provider(move || config);

    let mut popup_anchor = use_signal(|| None::<PopupAnchor>);

    rsx! {
        style { {EDITOR_CSS} }
        div {
            class: "app-container",
            header {
                class: "toolbar-row",
                Toolbar {}
            }
            EditingSurface {
                on_link_click: move |anchor| popup_anchor.set(Some(anchor)),
            }
            if let Some(anchor) = popup_anchor() {
                LinkPopup {
                    href: anchor.href.clone(),
                    top: anchor.top,
                    left: anchor.left,
                    on_close: move |_| popup_anchor.set(None),
                    on_edit_link: move |new_href: String| {
                        store.apply(Command::SetLink { href: new_href });
                    },
                    on_remove_link: move |_| store.apply(Command::UnsetLink),
                }
            }
        }
    }
}
