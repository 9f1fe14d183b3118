use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::commands::Command;
use crate::engine::{EngineEvent, Listener, ListenerId, TextEngine};
use crate::types::{AttrMap, FormatKind};

/// Weak, revocable reference to the live engine instance.
///
/// Exactly one engine is live at a time; the editing surface owns the
/// strong reference and every toolbar control holds one of these. Once the
/// surface unmounts, every query degrades to its documented default and
/// every command becomes a no-op.
#[derive(Clone)]
pub struct EditorHandle {
    inner: Weak<RefCell<dyn TextEngine>>,
}

impl PartialEq for EditorHandle {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for EditorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorHandle")
            .field("live", &self.is_live())
            .finish()
    }
}

impl EditorHandle {
    pub fn new(engine: &Rc<RefCell<dyn TextEngine>>) -> Self {
        Self {
            inner: Rc::downgrade(engine),
        }
    }

    pub fn upgrade(&self) -> Option<Rc<RefCell<dyn TextEngine>>> {
        self.inner.upgrade()
    }

    pub fn is_live(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Start a command chain: `handle.chain().focus().cmd(c).run()`.
    pub fn chain(&self) -> CommandChain {
        CommandChain {
            target: self.upgrade(),
            focus: false,
            commands: Vec::new(),
        }
    }

    /// Focus the surface, run one command. The common toolbar dispatch.
    pub fn apply(&self, command: Command) {
        self.chain().focus().cmd(command).run();
    }

    pub fn is_active(&self, kind: FormatKind, attrs: &AttrMap) -> bool {
        match self.upgrade() {
            Some(engine) => engine.borrow().is_active(kind, attrs),
            None => false,
        }
    }

    pub fn attributes(&self, kind: FormatKind) -> AttrMap {
        match self.upgrade() {
            Some(engine) => engine.borrow().attributes(kind),
            None => AttrMap::new(),
        }
    }

    pub fn selection_mark_values(&self, kind: FormatKind, attr: &str) -> Vec<String> {
        match self.upgrade() {
            Some(engine) => engine.borrow().selection_mark_values(kind, attr),
            None => Vec::new(),
        }
    }

    /// Subscribe `listener` to `event`. The returned guard unsubscribes on
    /// drop; a dead handle yields an inert guard.
    pub fn on(&self, event: EngineEvent, listener: Listener) -> Subscription {
        let id = self
            .upgrade()
            .map(|engine| engine.borrow_mut().subscribe(event, listener));
        Subscription {
            handle: self.clone(),
            event,
            id,
        }
    }
}

/// Builder mirroring the engine's chainable command surface:
/// focus, then formatting commands, then run. Dead handles no-op.
pub struct CommandChain {
    target: Option<Rc<RefCell<dyn TextEngine>>>,
    focus: bool,
    commands: Vec<Command>,
}

impl CommandChain {
    pub fn focus(mut self) -> Self {
        self.focus = true;
        self
    }

    pub fn cmd(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn run(self) {
        let Some(engine) = self.target else {
            log::trace!("command chain dropped: no live engine");
            return;
        };
        let mut engine = engine.borrow_mut();
        if self.focus {
            engine.focus();
        }
        for command in self.commands {
            engine.execute(command);
        }
    }
}

/// RAII subscription to an engine event; unsubscribes when dropped so a
/// torn-down control can never be called on a destroyed handle.
pub struct Subscription {
    handle: EditorHandle,
    event: EngineEvent,
    id: Option<ListenerId>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(engine) = self.handle.upgrade()
            && let Ok(mut engine) = engine.try_borrow_mut()
        {
            engine.unsubscribe(self.event, id);
        }
    }
}
