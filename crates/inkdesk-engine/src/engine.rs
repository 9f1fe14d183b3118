use std::rc::Rc;

use crate::commands::Command;
use crate::types::{AttrMap, FormatKind, Selection};

/// Change notifications emitted by the engine. They carry no payload:
/// "something changed — re-query".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    /// The selection moved without the document changing.
    SelectionUpdate,
    /// The document content changed.
    Update,
    /// Any transaction went through, including selection-only ones.
    Transaction,
}

/// Callback registered for an [`EngineEvent`]. Listeners run on the UI
/// thread while the engine is mid-notification and must not call back into
/// the engine synchronously; re-query on the next turn of the event loop.
pub type Listener = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// The surface this UI consumes from the external rich-text engine.
///
/// The engine owns the document model, marks, selection and undo history.
/// Everything here is a query over the current selection or a command
/// dispatched against it.
pub trait TextEngine {
    /// Return input focus to the editing surface so consecutive commands
    /// compose without losing the cursor.
    fn focus(&mut self);

    /// Apply a formatting command. Returns whether the engine accepted it.
    fn execute(&mut self, command: Command) -> bool;

    /// Whether `kind` is active at the current selection. `attrs` narrows
    /// the query (e.g. heading level, alignment value); an empty map asks
    /// only about the kind itself.
    fn is_active(&self, kind: FormatKind, attrs: &AttrMap) -> bool;

    /// Attributes of `kind` at the current selection; empty when inactive.
    fn attributes(&self, kind: FormatKind) -> AttrMap;

    fn selection(&self) -> Selection;

    /// Distinct values of `attr` for `kind` across the selection. More than
    /// one entry means the selection spans mixed formatting.
    fn selection_mark_values(&self, kind: FormatKind, attr: &str) -> Vec<String>;

    fn subscribe(&mut self, event: EngineEvent, listener: Listener) -> ListenerId;

    fn unsubscribe(&mut self, event: EngineEvent, id: ListenerId);
}
