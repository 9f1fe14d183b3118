use dioxus::prelude::*;
use inkdesk_config::Config;
use inkdesk_engine::{Command, FormatKind, FormatSnapshot};

use crate::ui::components::{
    AlignButton, EditorTooltip, FontFamilyButton, FontSizeButton, HeadingButton,
    HighlightColorButton, ImageButton, LineHeightButton, LinkButton, ListButton,
    TextColorButton,
};
use crate::ui::store::use_editor_store;
use crate::ui::sync::{TRANSACTION_EVENTS, use_engine_revision};

/// What a simple toolbar button does when clicked. Everything that is not
/// an engine command is host-side behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonAction {
    Engine(Command),
    Print,
    ToggleSpellCheck,
    Comment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub glyph: &'static str,
    pub tooltip: String,
    pub action: ButtonAction,
    /// Formatting kind whose active state highlights the button.
    pub probe: Option<FormatKind>,
}

/// The toolbar is a flat list of these descriptors; every control shape is
/// a variant, so an unsupported shape cannot be smuggled in as data.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarItem {
    Button(ButtonSpec),
    Separator,
    FontFamily,
    Heading,
    FontSize,
    TextColor,
    HighlightColor,
    Link,
    Image,
    Align,
    LineHeight,
    List,
}

fn history_section(spell_check: bool) -> Vec<ButtonSpec> {
    vec![
        ButtonSpec {
            label: "Undo",
            glyph: "↶",
            tooltip: "Undo (Ctrl+Z)".into(),
            action: ButtonAction::Engine(Command::Undo),
            probe: None,
        },
        ButtonSpec {
            label: "Redo",
            glyph: "↷",
            tooltip: "Redo (Ctrl+Y)".into(),
            action: ButtonAction::Engine(Command::Redo),
            probe: None,
        },
        ButtonSpec {
            label: "Print",
            glyph: "🖨",
            tooltip: "Print (Ctrl+P)".into(),
            action: ButtonAction::Print,
            probe: None,
        },
        ButtonSpec {
            label: "Spell Check",
            glyph: "🔤",
            tooltip: if spell_check {
                "Disable Spell Check".into()
            } else {
                "Enable Spell Check".into()
            },
            action: ButtonAction::ToggleSpellCheck,
            probe: None,
        },
    ]
}

fn mark_section() -> Vec<ButtonSpec> {
    vec![
        ButtonSpec {
            label: "Bold",
            glyph: "B",
            tooltip: "Bold (Ctrl+B)".into(),
            action: ButtonAction::Engine(Command::ToggleBold),
            probe: Some(FormatKind::Bold),
        },
        ButtonSpec {
            label: "Italic",
            glyph: "I",
            tooltip: "Italic (Ctrl+I)".into(),
            action: ButtonAction::Engine(Command::ToggleItalic),
            probe: Some(FormatKind::Italic),
        },
        ButtonSpec {
            label: "Underline",
            glyph: "U",
            tooltip: "Underline (Ctrl+U)".into(),
            action: ButtonAction::Engine(Command::ToggleUnderline),
            probe: Some(FormatKind::Underline),
        },
    ]
}

fn block_section() -> Vec<ButtonSpec> {
    vec![
        ButtonSpec {
            label: "Comment",
            glyph: "💬",
            tooltip: "Comment".into(),
            action: ButtonAction::Comment,
            probe: None,
        },
        ButtonSpec {
            label: "Check List",
            glyph: "☑",
            tooltip: "Check List".into(),
            action: ButtonAction::Engine(Command::ToggleTaskList),
            probe: Some(FormatKind::TaskList),
        },
        ButtonSpec {
            label: "Clear Formatting",
            glyph: "Tₓ",
            tooltip: "Clear Formatting".into(),
            action: ButtonAction::Engine(Command::UnsetAllMarks),
            probe: None,
        },
    ]
}

/// Full toolbar layout, in display order.
fn toolbar_items(spell_check: bool) -> Vec<ToolbarItem> {
    let mut items: Vec<ToolbarItem> = history_section(spell_check)
        .into_iter()
        .map(ToolbarItem::Button)
        .collect();
    items.extend([
        ToolbarItem::Separator,
        ToolbarItem::FontFamily,
        ToolbarItem::Separator,
        ToolbarItem::Heading,
        ToolbarItem::Separator,
        ToolbarItem::FontSize,
        ToolbarItem::Separator,
    ]);
    items.extend(mark_section().into_iter().map(ToolbarItem::Button));
    items.extend([
        ToolbarItem::TextColor,
        ToolbarItem::HighlightColor,
        ToolbarItem::Separator,
    ]);
    items.extend(block_section().into_iter().map(ToolbarItem::Button));
    items.extend([
        ToolbarItem::Link,
        ToolbarItem::Image,
        ToolbarItem::Align,
        ToolbarItem::LineHeight,
        ToolbarItem::List,
    ]);
    items
}

fn button_active(spec: &ButtonSpec, snapshot: &FormatSnapshot, spell_check: bool) -> bool {
    match (spec.probe, &spec.action) {
        (Some(kind), _) => probe_active(snapshot, kind),
        (None, ButtonAction::ToggleSpellCheck) => spell_check,
        _ => false,
    }
}

fn probe_active(snapshot: &FormatSnapshot, kind: FormatKind) -> bool {
    match kind {
        FormatKind::Bold => snapshot.bold,
        FormatKind::Italic => snapshot.italic,
        FormatKind::Underline => snapshot.underline,
        FormatKind::TaskList => snapshot.task_list,
        FormatKind::Link => snapshot.link_href.is_some(),
        _ => false,
    }
}

fn render_item(
    item: ToolbarItem,
    snapshot: &FormatSnapshot,
    spell_check: bool,
    on_action: EventHandler<ButtonAction>,
) -> Element {
    match item {
        ToolbarItem::Button(spec) => rsx! {
            ToolbarButton {
                active: button_active(&spec, snapshot, spell_check),
                spec,
                on_action,
            }
        },
        ToolbarItem::Separator => rsx! {
            div { class: "separator" }
        },
        ToolbarItem::FontFamily => rsx! {
            FontFamilyButton {}
        },
        ToolbarItem::Heading => rsx! {
            HeadingButton {}
        },
        ToolbarItem::FontSize => rsx! {
            FontSizeButton {}
        },
        ToolbarItem::TextColor => rsx! {
            TextColorButton {}
        },
        ToolbarItem::HighlightColor => rsx! {
            HighlightColorButton {}
        },
        ToolbarItem::Link => rsx! {
            LinkButton {}
        },
        ToolbarItem::Image => rsx! {
            ImageButton {}
        },
        ToolbarItem::Align => rsx! {
            AlignButton {}
        },
        ToolbarItem::LineHeight => rsx! {
            LineHeightButton {}
        },
        ToolbarItem::List => rsx! {
            ListButton {}
        },
    }
}

#[component]
fn ToolbarButton(
    active: bool,
    spec: ButtonSpec,
    on_action: EventHandler<ButtonAction>,
) -> Element {
    let class = if active {
        "toolbar-button is-active"
    } else {
        "toolbar-button"
    };
    let action = spec.action.clone();

    rsx! {
        EditorTooltip {
            content: spec.tooltip.clone(),
            button {
                class: "{class}",
                "aria-label": "{spec.label}",
                onclick: move |_| on_action.call(action.clone()),
                span { class: "glyph", "{spec.glyph}" }
            }
        }
    }
}

#[component]
pub fn Toolbar() -> Element {
    let store = use_editor_store();
    let config = use_context::<Config>();
    let revision = use_engine_revision(TRANSACTION_EVENTS);
    let mut spell_check = use_signal(move || config.spellcheck);

    // Push the toggle onto the surface element imperatively; the engine
    // owns that DOM, not this component.
    use_effect(move || {
        let enabled = spell_check();
        document::eval(&format!(
            "const surface = document.getElementById('editing-surface'); \
             if (surface) {{ surface.setAttribute('spellcheck', '{enabled}'); \
             surface.setAttribute('lang', 'en'); }}"
        ));
    });

    let snapshot = use_memo(move || {
        revision();
        store.snapshot()
    });

    let on_action: EventHandler<ButtonAction> =
        Callback::new(move |action: ButtonAction| match action {
            ButtonAction::Engine(command) => store.apply(command),
            ButtonAction::Print => {
                document::eval("window.print();");
            }
            ButtonAction::ToggleSpellCheck => spell_check.toggle(),
            ButtonAction::Comment => {
                log::debug!("comment requested; comments are not wired up");
            }
        });

    let current = snapshot();

    rsx! {
        div {
            class: "toolbar",
            for item in toolbar_items(spell_check()) {
                {render_item(item, &current, spell_check(), on_action)}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn probes_follow_the_snapshot() {
        let snapshot = FormatSnapshot {
            bold: true,
            link_href: Some("https://example.com".into()),
            ..Default::default()
        };
        assert!(probe_active(&snapshot, FormatKind::Bold));
        assert!(probe_active(&snapshot, FormatKind::Link));
        assert!(!probe_active(&snapshot, FormatKind::Italic));
        // Non-toggle kinds never highlight a simple button.
        assert!(!probe_active(&snapshot, FormatKind::FontSize));
    }

    #[test]
    fn spell_check_button_highlights_from_local_state() {
        let spec = &history_section(true)[3];
        assert_eq!(spec.action, ButtonAction::ToggleSpellCheck);
        assert!(button_active(spec, &FormatSnapshot::default(), true));
        assert!(!button_active(spec, &FormatSnapshot::default(), false));
    }

    #[test]
    fn spell_check_tooltip_tracks_state() {
        assert_eq!(history_section(true)[3].tooltip, "Disable Spell Check");
        assert_eq!(history_section(false)[3].tooltip, "Enable Spell Check");
    }

    #[test]
    fn layout_contains_every_control_shape() {
        let items = toolbar_items(true);
        for expected in [
            ToolbarItem::FontFamily,
            ToolbarItem::Heading,
            ToolbarItem::FontSize,
            ToolbarItem::TextColor,
            ToolbarItem::HighlightColor,
            ToolbarItem::Link,
            ToolbarItem::Image,
            ToolbarItem::Align,
            ToolbarItem::LineHeight,
            ToolbarItem::List,
        ] {
            assert!(items.contains(&expected), "missing {expected:?}");
        }
        let buttons = items
            .iter()
            .filter(|item| matches!(item, ToolbarItem::Button(_)))
            .count();
        assert_eq!(buttons, 10);
    }
}
