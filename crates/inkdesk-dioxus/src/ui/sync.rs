use std::rc::Rc;

use dioxus::prelude::*;
use inkdesk_engine::{EngineEvent, Subscription};

use crate::ui::store::use_editor_store;

/// Events for controls that track the caret: "selection moved" plus
/// "document changed".
pub const SELECTION_EVENTS: &[EngineEvent] =
    &[EngineEvent::SelectionUpdate, EngineEvent::Update];

/// Every transaction, for controls whose icon mirrors block state.
pub const TRANSACTION_EVENTS: &[EngineEvent] = &[EngineEvent::Transaction];

/// Bridge the engine's notification stream into the reactive graph.
///
/// Returns a revision counter bumped on each of the listed events; a memo
/// that reads it re-derives its value within one notification cycle.
/// Subscriptions are RAII guards: swapping the store's handle replaces
/// them, and unmounting drops them, so no listener ever outlives its
/// engine.
pub fn use_engine_revision(events: &'static [EngineEvent]) -> ReadOnlySignal<u64> {
    let store = use_editor_store();
    let revision = use_signal(|| 0u64);
    let mut subscriptions: Signal<Vec<Subscription>> = use_signal(Vec::new);

    use_effect(move || {
        let next = match store.handle() {
            Some(handle) => events
                .iter()
                .map(|event| {
                    handle.on(
                        *event,
                        // Signals are Copy; a local rebind gives the Fn
                        // closure a mutable slot to bump.
                        Rc::new(move || {
                            let mut revision = revision;
                            revision += 1;
                        }),
                    )
                })
                .collect(),
            None => Vec::new(),
        };
        subscriptions.set(next);
    });

    ReadOnlySignal::from(revision)
}
