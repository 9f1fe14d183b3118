use dioxus::prelude::*;

/// Hover tooltip for toolbar controls, rendered via CSS from the
/// `data-tooltip` attribute so no portal or timer plumbing is needed.
#[component]
pub fn EditorTooltip(content: String, children: Element) -> Element {
    rsx! {
        span {
            class: "tooltip-host",
            "data-tooltip": "{content}",
            {children}
        }
    }
}
