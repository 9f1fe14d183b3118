//! Adapter-level properties: apply-then-read round trips, focus ordering,
//! dead-handle degradation, and notification lifecycles — all against the
//! scripted stub engine.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pretty_assertions::assert_eq;

use inkdesk_engine::stub::{StubEngine, StubOp};
use inkdesk_engine::{
    Alignment, Command, EditorHandle, EngineEvent, FontSizeReading, FormatKind, FormatSnapshot,
    LineHeight, ListKind, Selection, TextEngine, attr,
};

struct Fixture {
    stub: Rc<RefCell<StubEngine>>,
    // Keeps the handle's target alive; dropping this kills the handle.
    strong: Rc<RefCell<dyn TextEngine>>,
    handle: EditorHandle,
}

fn live_engine() -> Fixture {
    let stub = Rc::new(RefCell::new(StubEngine::new()));
    let strong: Rc<RefCell<dyn TextEngine>> = stub.clone();
    let handle = EditorHandle::new(&strong);
    Fixture { stub, strong, handle }
}

#[test]
fn apply_then_read_round_trips_every_value_kind() {
    let fixture = live_engine();
    let handle = &fixture.handle;

    handle.apply(Command::SetFontFamily("Georgia, serif".into()));
    handle.apply(Command::SetFontSize(24));
    handle.apply(Command::SetTextColor("#FF0000".into()));
    handle.apply(Command::SetHighlight("#ffff00".into()));
    handle.apply(Command::SetHeading(2));
    handle.apply(Command::SetAlign(Alignment::Center));
    handle.apply(Command::SetLineHeight(LineHeight::Double));
    handle.apply(Command::SetLink {
        href: "https://example.com".into(),
    });
    handle.apply(Command::ToggleBold);
    handle.apply(Command::ToggleBulletList);

    let snapshot = FormatSnapshot::read(Some(handle));
    assert_eq!(snapshot.font_family, "Georgia, serif");
    assert_eq!(snapshot.font_size, FontSizeReading::Px(24));
    // Colors read back lowercased for stable swatch comparison.
    assert_eq!(snapshot.text_color, "#ff0000");
    assert_eq!(snapshot.highlight_color, "#ffff00");
    assert_eq!(snapshot.heading_level, 2);
    assert_eq!(snapshot.align, Alignment::Center);
    assert_eq!(snapshot.line_height, LineHeight::Double);
    assert_eq!(snapshot.link_href.as_deref(), Some("https://example.com"));
    assert!(snapshot.bold);
    assert_eq!(snapshot.list, Some(ListKind::Bullet));

    assert_eq!(snapshot.value(FormatKind::FontSize), "24");
    assert_eq!(snapshot.value(FormatKind::Align), "center");
    assert_eq!(snapshot.value(FormatKind::LineHeight), "2");
}

#[test]
fn font_size_is_canonicalized_to_px_on_the_wire() {
    let fixture = live_engine();
    fixture.handle.apply(Command::SetFontSize(24));

    assert_eq!(
        fixture
            .stub
            .borrow()
            .attributes(FormatKind::FontSize)
            .get(attr::FONT_SIZE),
        Some(&"24px".to_string())
    );
    // ...and parsed back to a bare integer for display.
    let snapshot = FormatSnapshot::read(Some(&fixture.handle));
    assert_eq!(snapshot.value(FormatKind::FontSize), "24");
}

#[test]
fn apply_focuses_the_surface_before_mutating() {
    let fixture = live_engine();
    fixture.handle.apply(Command::ToggleBold);
    fixture.handle.apply(Command::ToggleItalic);

    assert_eq!(
        fixture.stub.borrow().ops(),
        &[
            StubOp::Focus,
            StubOp::Execute(Command::ToggleBold),
            StubOp::Focus,
            StubOp::Execute(Command::ToggleItalic),
        ]
    );
}

#[test]
fn dead_handle_degrades_to_defaults_and_noops() {
    let fixture = live_engine();
    let handle = fixture.handle.clone();
    drop(fixture);

    assert!(!handle.is_live());
    // Commands are silently dropped...
    handle.apply(Command::ToggleBold);
    // ...and queries return the documented defaults.
    let snapshot = FormatSnapshot::read(Some(&handle));
    assert_eq!(snapshot, FormatSnapshot::default());
    assert!(!handle.is_active(FormatKind::Bold, &Default::default()));
}

#[test]
fn mixed_selection_reads_mixed_and_displays_empty() {
    let fixture = live_engine();
    fixture.stub.borrow_mut().script_selection_values(
        FormatKind::FontSize,
        attr::FONT_SIZE,
        vec!["14px".into(), "24px".into()],
    );

    let snapshot = FormatSnapshot::read(Some(&fixture.handle));
    assert_eq!(snapshot.font_size, FontSizeReading::Mixed);
    assert_eq!(snapshot.value(FormatKind::FontSize), "");
}

#[test]
fn subscriptions_fire_on_execute_and_stop_after_drop() {
    let fixture = live_engine();
    let hits = Rc::new(Cell::new(0u32));

    let subscription = {
        let hits = hits.clone();
        fixture
            .handle
            .on(EngineEvent::Update, Rc::new(move || hits.set(hits.get() + 1)))
    };

    fixture.handle.apply(Command::ToggleBold);
    assert_eq!(hits.get(), 1);

    drop(subscription);
    fixture.handle.apply(Command::ToggleItalic);
    assert_eq!(hits.get(), 1);
}

#[test]
fn selection_updates_notify_selection_listeners_only() {
    let fixture = live_engine();

    let selection_hits = Rc::new(Cell::new(0u32));
    let update_hits = Rc::new(Cell::new(0u32));
    let _selection_sub = {
        let hits = selection_hits.clone();
        fixture.handle.on(
            EngineEvent::SelectionUpdate,
            Rc::new(move || hits.set(hits.get() + 1)),
        )
    };
    let _update_sub = {
        let hits = update_hits.clone();
        fixture
            .handle
            .on(EngineEvent::Update, Rc::new(move || hits.set(hits.get() + 1)))
    };

    fixture.stub.borrow_mut().set_selection(Selection::new(3, 9));
    assert_eq!(selection_hits.get(), 1);
    assert_eq!(update_hits.get(), 0);

    // The handle stays comparable across clones of the same engine.
    assert_eq!(fixture.handle, EditorHandle::new(&fixture.strong));
}

#[test]
fn unset_all_marks_clears_character_formatting_only() {
    let fixture = live_engine();
    let handle = &fixture.handle;
    handle.apply(Command::ToggleBold);
    handle.apply(Command::SetTextColor("#ff0000".into()));
    handle.apply(Command::SetAlign(Alignment::Right));
    handle.apply(Command::UnsetAllMarks);

    let snapshot = FormatSnapshot::read(Some(handle));
    assert!(!snapshot.bold);
    assert_eq!(snapshot.text_color, "#000000");
    // Block-level state survives.
    assert_eq!(snapshot.align, Alignment::Right);
}
