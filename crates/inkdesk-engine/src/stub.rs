//! Scripted in-memory engine.
//!
//! Stands in for the external rich-text engine in tests and in the demo
//! shell until real bindings are wired up. It records the commands it is
//! given and tracks per-kind attributes; it holds no document text and no
//! undo history.

use std::collections::{HashMap, HashSet};

use crate::commands::Command;
use crate::engine::{EngineEvent, Listener, ListenerId, TextEngine};
use crate::snapshot::px_string;
use crate::types::{AttrMap, FormatKind, Selection, attr};

/// One entry in the stub's operation log, in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum StubOp {
    Focus,
    Execute(Command),
}

#[derive(Default)]
pub struct StubEngine {
    active: HashSet<FormatKind>,
    attrs: HashMap<FormatKind, AttrMap>,
    selection: Selection,
    scripted_values: HashMap<(FormatKind, String), Vec<String>>,
    ops: Vec<StubOp>,
    listeners: HashMap<EngineEvent, Vec<(ListenerId, Listener)>>,
    next_listener_id: u64,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands executed so far, in order.
    pub fn executed(&self) -> Vec<Command> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                StubOp::Execute(command) => Some(command.clone()),
                StubOp::Focus => None,
            })
            .collect()
    }

    /// Full focus/execute log, in order.
    pub fn ops(&self) -> &[StubOp] {
        &self.ops
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.emit(EngineEvent::SelectionUpdate);
        self.emit(EngineEvent::Transaction);
    }

    /// Script the distinct values reported for `kind`/`attr` across the
    /// selection — e.g. two sizes to simulate a mixed-size selection.
    pub fn script_selection_values(
        &mut self,
        kind: FormatKind,
        attr: &str,
        values: Vec<String>,
    ) {
        self.scripted_values.insert((kind, attr.to_string()), values);
    }

    fn attrs_mut(&mut self, kind: FormatKind) -> &mut AttrMap {
        self.attrs.entry(kind).or_default()
    }

    fn set_attr(&mut self, kind: FormatKind, key: &str, value: String) {
        self.attrs_mut(kind).insert(key.to_string(), value);
    }

    fn clear_kind(&mut self, kind: FormatKind) {
        self.attrs.remove(&kind);
        self.active.remove(&kind);
    }

    fn emit(&self, event: EngineEvent) {
        let Some(listeners) = self.listeners.get(&event) else {
            return;
        };
        // Listeners may not re-enter the engine; clone the list so a
        // listener dropping its own subscription later stays sound.
        let callbacks: Vec<Listener> =
            listeners.iter().map(|(_, listener)| listener.clone()).collect();
        for callback in callbacks {
            callback();
        }
    }

    fn toggle(&mut self, kind: FormatKind) {
        if !self.active.insert(kind) {
            self.active.remove(&kind);
        }
    }

    fn apply_command(&mut self, command: &Command) {
        match command {
            Command::ToggleBold => self.toggle(FormatKind::Bold),
            Command::ToggleItalic => self.toggle(FormatKind::Italic),
            Command::ToggleUnderline => self.toggle(FormatKind::Underline),
            Command::ToggleTaskList => self.toggle(FormatKind::TaskList),
            Command::ToggleBulletList => {
                self.active.remove(&FormatKind::OrderedList);
                self.toggle(FormatKind::BulletList);
            }
            Command::ToggleOrderedList => {
                self.active.remove(&FormatKind::BulletList);
                self.toggle(FormatKind::OrderedList);
            }
            // Undo/redo belong to the engine; the stub only records them.
            Command::Undo | Command::Redo => {}
            Command::UnsetAllMarks => {
                for kind in [
                    FormatKind::Bold,
                    FormatKind::Italic,
                    FormatKind::Underline,
                    FormatKind::FontFamily,
                    FormatKind::FontSize,
                    FormatKind::TextColor,
                    FormatKind::Highlight,
                    FormatKind::Link,
                ] {
                    self.clear_kind(kind);
                }
            }
            Command::SetFontFamily(family) => {
                self.set_attr(FormatKind::FontFamily, attr::FONT_FAMILY, family.clone());
            }
            Command::SetFontSize(size) => {
                self.set_attr(FormatKind::FontSize, attr::FONT_SIZE, px_string(*size));
            }
            Command::SetTextColor(color) => {
                self.set_attr(FormatKind::TextColor, attr::COLOR, color.clone());
            }
            Command::SetHighlight(color) => {
                self.set_attr(FormatKind::Highlight, attr::COLOR, color.clone());
                self.active.insert(FormatKind::Highlight);
            }
            Command::UnsetHighlight => self.clear_kind(FormatKind::Highlight),
            Command::SetHeading(level) => {
                self.set_attr(FormatKind::Heading, attr::LEVEL, level.to_string());
                self.active.insert(FormatKind::Heading);
            }
            Command::SetParagraph => self.clear_kind(FormatKind::Heading),
            Command::SetAlign(alignment) => {
                self.set_attr(FormatKind::Align, attr::ALIGN, alignment.as_str().to_string());
            }
            Command::SetLineHeight(line_height) => {
                self.set_attr(
                    FormatKind::LineHeight,
                    attr::LINE_HEIGHT,
                    line_height.css_value().to_string(),
                );
            }
            Command::SetLink { href } => {
                self.set_attr(FormatKind::Link, attr::HREF, href.clone());
                self.active.insert(FormatKind::Link);
            }
            Command::UnsetLink => self.clear_kind(FormatKind::Link),
            Command::SetImage { src } => {
                self.set_attr(FormatKind::Image, attr::SRC, src.clone());
            }
        }
    }
}

impl TextEngine for StubEngine {
    fn focus(&mut self) {
        self.ops.push(StubOp::Focus);
    }

    fn execute(&mut self, command: Command) -> bool {
        self.apply_command(&command);
        self.ops.push(StubOp::Execute(command));
        self.emit(EngineEvent::Update);
        self.emit(EngineEvent::Transaction);
        true
    }

    fn is_active(&self, kind: FormatKind, query: &AttrMap) -> bool {
        let stored = self.attrs.get(&kind);
        // Alignment is pure attribute state, never a toggle.
        let flagged = self.active.contains(&kind)
            || (kind == FormatKind::Align && stored.is_some());
        if !flagged {
            return false;
        }
        query
            .iter()
            .all(|(key, value)| stored.is_some_and(|map| map.get(key) == Some(value)))
    }

    fn attributes(&self, kind: FormatKind) -> AttrMap {
        self.attrs.get(&kind).cloned().unwrap_or_default()
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn selection_mark_values(&self, kind: FormatKind, attr: &str) -> Vec<String> {
        if let Some(values) = self.scripted_values.get(&(kind, attr.to_string())) {
            return values.clone();
        }
        self.attrs
            .get(&kind)
            .and_then(|map| map.get(attr))
            .map(|value| vec![value.clone()])
            .unwrap_or_default()
    }

    fn subscribe(&mut self, event: EngineEvent, listener: Listener) -> ListenerId {
        self.next_listener_id += 1;
        let id = ListenerId::new(self.next_listener_id);
        self.listeners.entry(event).or_default().push((id, listener));
        id
    }

    fn unsubscribe(&mut self, event: EngineEvent, id: ListenerId) {
        if let Some(listeners) = self.listeners.get_mut(&event) {
            listeners.retain(|(listener_id, _)| *listener_id != id);
        }
    }
}
