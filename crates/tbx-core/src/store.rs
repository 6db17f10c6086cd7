//! Document store: owns the current document and the id allocator.
//!
//! Every operation is total. An id that names no box turns the operation
//! into a no-op rather than an error; the store never touches history or
//! selection.

use crate::id::{BoxId, IdAllocator};
use crate::model::*;
use crate::style::{self, StyleOp};

/// A single change to the document, applied by [`DocumentStore::apply_mutation`].
#[derive(Debug, Clone, PartialEq)]
pub enum BoxMutation {
    /// Append a new box carrying this style.
    AddBox { style: Style },
    SetText { id: BoxId, text: String },
    MoveBox { id: BoxId, x: f32, y: f32 },
    RemoveBox { id: BoxId },
    ToggleStyle { id: BoxId, op: StyleOp },
    SetFontFamily { id: BoxId, family: FontFamily },
    SetFontSize { id: BoxId, size: u32 },
}

impl BoxMutation {
    /// Short human-readable label, used in log lines.
    pub fn describe(&self) -> String {
        match self {
            BoxMutation::AddBox { .. } => "add box".to_string(),
            BoxMutation::SetText { id, .. } => format!("edit text of {id}"),
            BoxMutation::MoveBox { id, x, y } => format!("move {id} to ({x}, {y})"),
            BoxMutation::RemoveBox { id } => format!("delete {id}"),
            BoxMutation::ToggleStyle { id, op } => format!("toggle {} on {id}", op.name()),
            BoxMutation::SetFontFamily { id, family } => {
                format!("set font of {id} to {}", family.name())
            }
            BoxMutation::SetFontSize { id, size } => format!("set size of {id} to {size}"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    document: Document,
    ids: IdAllocator,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document. Ids keep counting from zero, skipping
    /// any that the document already uses.
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            ids: IdAllocator::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Swap in another document (used by undo/redo), returning the old one.
    /// Id allocation is unaffected.
    pub fn replace_document(&mut self, document: Document) -> Document {
        std::mem::replace(&mut self.document, document)
    }

    /// Read-only view of every box, in z-order.
    pub fn all(&self) -> &[TextBox] {
        self.document.boxes()
    }

    pub fn get(&self, id: BoxId) -> Option<&TextBox> {
        self.document.get(id)
    }

    pub fn contains(&self, id: BoxId) -> bool {
        self.document.contains(id)
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// Append a new box at the default position. Never fails.
    pub fn add_box(&mut self, style: Style) -> BoxId {
        let id = self.next_free_id();
        self.document.push(TextBox::new(id, style));
        id
    }

    pub fn update_text(&mut self, id: BoxId, text: impl Into<String>) {
        match self.document.get_mut(id) {
            Some(b) => b.text = text.into(),
            None => log::trace!("update_text: no box {id}"),
        }
    }

    pub fn move_to(&mut self, id: BoxId, x: f32, y: f32) {
        match self.document.get_mut(id) {
            Some(b) => b.position = Position::new(x, y),
            None => log::trace!("move_to: no box {id}"),
        }
    }

    pub fn remove(&mut self, id: BoxId) {
        if self.document.remove(id).is_none() {
            log::trace!("remove: no box {id}");
        }
    }

    /// Replace a box's style with `f(old_style)`.
    pub fn update_style(&mut self, id: BoxId, f: impl FnOnce(&Style) -> Style) {
        match self.document.get_mut(id) {
            Some(b) => b.style = f(&b.style),
            None => log::trace!("update_style: no box {id}"),
        }
    }

    /// Apply a mutation. Returns the id of the box it created, if any.
    pub fn apply_mutation(&mut self, mutation: BoxMutation) -> Option<BoxId> {
        match mutation {
            BoxMutation::AddBox { style } => return Some(self.add_box(style)),
            BoxMutation::SetText { id, text } => self.update_text(id, text),
            BoxMutation::MoveBox { id, x, y } => self.move_to(id, x, y),
            BoxMutation::RemoveBox { id } => self.remove(id),
            BoxMutation::ToggleStyle { id, op } => self.update_style(id, |s| style::toggle(s, op)),
            BoxMutation::SetFontFamily { id, family } => {
                self.update_style(id, |s| style::with_font_family(s, family))
            }
            BoxMutation::SetFontSize { id, size } => {
                self.update_style(id, |s| style::with_font_size(s, size))
            }
        }
        None
    }

    /// Allocate an id no box in the current document carries.
    fn next_free_id(&mut self) -> BoxId {
        loop {
            let id = self.ids.allocate();
            if !self.document.contains(id) {
                return id;
            }
        }
    }
}
