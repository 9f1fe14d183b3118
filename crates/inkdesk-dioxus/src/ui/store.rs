use dioxus::prelude::*;
use inkdesk_engine::{Command, EditorHandle, FormatSnapshot};

/// Shared registry for the one live engine handle.
///
/// Provided once at the app root and reached through context, so no control
/// threads the handle through props. Consumers subscribe by reading the
/// inner signal: swapping the handle (surface mount/unmount) re-renders
/// them. Only the editing surface lifecycle may call `set`/`clear`.
#[derive(Clone, Copy)]
pub struct EditorStore {
    handle: Signal<Option<EditorHandle>>,
}

impl EditorStore {
    pub fn provide() -> Self {
        use_context_provider(|| Self {
            handle: Signal::new(None),
        })
    }

    pub fn handle(&self) -> Option<EditorHandle> {
        self.handle.read().clone()
    }

    pub fn set(&mut self, handle: EditorHandle) {
        // Replacing the previous handle revokes it for every consumer.
        self.handle.set(Some(handle));
    }

    pub fn clear(&mut self) {
        self.handle.set(None);
    }

    /// Dispatch a command against the live engine; a no-op without one.
    pub fn apply(&self, command: Command) {
        match self.handle() {
            Some(handle) => handle.apply(command),
            None => log::trace!("dropped {command:?}: no live editor"),
        }
    }

    /// Formatting state at the current selection, defaults when no engine.
    pub fn snapshot(&self) -> FormatSnapshot {
        FormatSnapshot::read(self.handle().as_ref())
    }
}

pub fn use_editor_store() -> EditorStore {
    use_context()
}
