use dioxus::prelude::*;

/// Full-window layer mounted behind an open dropdown, picker or popup.
///
/// A pointer-down anywhere outside the control lands here and dismisses
/// it. Mounting the layer only while the control is open gives each open
/// instance its own listener and tears it down on close, so repeated
/// open/close cycles leak nothing.
#[component]
pub fn Backdrop(on_dismiss: EventHandler<()>, #[props(default)] dimmed: bool) -> Element {
    let class = if dimmed { "backdrop backdrop-dimmed" } else { "backdrop" };

    rsx! {
        div {
            class: "{class}",
            onmousedown: move |_| on_dismiss.call(()),
        }
    }
}
