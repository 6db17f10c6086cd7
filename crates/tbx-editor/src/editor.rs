//! Command dispatcher: the single owner of editor state.
//!
//! [`Editor`] holds the document store, the selection, the editing
//! defaults and the command stack. UI events become [`Action`]s and go
//! through [`Editor::dispatch`]; the named methods are the same commands
//! for callers that prefer direct calls.
//!
//! ## Which actions are recorded
//!
//! | Action | History entry |
//! |--------|---------------|
//! | add, edit text, move, delete | always, even for an unknown id |
//! | style toggle | only with a selection |
//! | font family / font size | only with a selection (defaults change regardless) |
//! | select, deselect, undo, redo | never |

use crate::commands::CommandStack;
use crate::config::{CanvasBounds, EditorConfig};
use crate::selection::Selection;
use tbx_core::style::clamp_font_size;
use tbx_core::*;

/// A user-level editor action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddBox,
    EditText { id: BoxId, text: String },
    Move { id: BoxId, x: f32, y: f32 },
    Delete { id: BoxId },
    Select { id: BoxId },
    Deselect,
    ToggleStyle(StyleOp),
    SetFontFamily(FontFamily),
    AdjustFontSize(i32),
    Undo,
    Redo,
}

/// What an action did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A box was created and one history entry recorded.
    Added(BoxId),
    /// One history entry was recorded.
    Committed,
    /// Undo or redo swapped in another document.
    Restored,
    /// The document and history are untouched.
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Editor {
    store: DocumentStore,
    selection: Selection,
    defaults: EditDefaults,
    commands: CommandStack,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Empty document, empty history, no selection.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self::from_document(Document::new(), config)
    }

    /// Start editing an existing document with an empty history.
    pub fn from_document(document: Document, config: EditorConfig) -> Self {
        let commands = match config.history_limit {
            Some(max) => CommandStack::with_max_depth(max),
            None => CommandStack::new(),
        };
        Self {
            store: DocumentStore::from_document(document),
            selection: Selection::new(),
            defaults: config.defaults(),
            commands,
            config,
        }
    }

    // ─── Read access ─────────────────────────────────────────────────────

    pub fn document(&self) -> &Document {
        self.store.document()
    }

    /// Every box in z-order, for rendering.
    pub fn boxes(&self) -> &[TextBox] {
        self.store.all()
    }

    pub fn get(&self, id: BoxId) -> Option<&TextBox> {
        self.store.get(id)
    }

    pub fn selected(&self) -> Option<BoxId> {
        self.selection.current()
    }

    pub fn selected_box(&self) -> Option<&TextBox> {
        self.selection.current().and_then(|id| self.store.get(id))
    }

    /// Alignment shown on the toolbar's align button. `Left` without a
    /// selected box.
    pub fn selected_alignment(&self) -> TextAlign {
        self.selected_box()
            .map(|b| b.style.text_align)
            .unwrap_or_default()
    }

    pub fn defaults(&self) -> EditDefaults {
        self.defaults
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Record new canvas bounds after the page resizes.
    pub fn set_canvas(&mut self, canvas: CanvasBounds) {
        self.config.canvas = canvas;
    }

    pub fn commands(&self) -> &CommandStack {
        &self.commands
    }

    pub fn can_undo(&self) -> bool {
        self.commands.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.commands.can_redo()
    }

    // ─── Dispatch ────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::AddBox => Outcome::Added(self.add_box()),
            Action::EditText { id, text } => {
                self.edit_text(id, text);
                Outcome::Committed
            }
            Action::Move { id, x, y } => {
                self.move_box(id, x, y);
                Outcome::Committed
            }
            Action::Delete { id } => {
                self.delete(id);
                Outcome::Committed
            }
            Action::Select { id } => {
                self.select(id);
                Outcome::Unchanged
            }
            Action::Deselect => {
                self.deselect();
                Outcome::Unchanged
            }
            Action::ToggleStyle(op) => committed_if(self.toggle_style(op)),
            Action::SetFontFamily(family) => committed_if(self.set_font_family(family)),
            Action::AdjustFontSize(delta) => {
                let recorded = self.selection.current().is_some();
                self.adjust_font_size(delta);
                committed_if(recorded)
            }
            Action::Undo => restored_if(self.undo()),
            Action::Redo => restored_if(self.redo()),
        }
    }

    // ─── Commands ────────────────────────────────────────────────────────

    /// Append a box styled with the current defaults.
    pub fn add_box(&mut self) -> BoxId {
        self.commands.record(&self.store, "add box");
        let id = self.store.add_box(self.defaults.style());
        log::debug!("execute: add box {id}");
        id
    }

    pub fn edit_text(&mut self, id: BoxId, text: impl Into<String>) {
        self.commands.execute(
            &mut self.store,
            BoxMutation::SetText {
                id,
                text: text.into(),
            },
        );
    }

    /// Final position of a drag.
    pub fn move_box(&mut self, id: BoxId, x: f32, y: f32) {
        self.commands
            .execute(&mut self.store, BoxMutation::MoveBox { id, x, y });
    }

    /// Remove a box, clearing the selection if it pointed there.
    pub fn delete(&mut self, id: BoxId) {
        self.commands
            .execute(&mut self.store, BoxMutation::RemoveBox { id });
        self.selection.clear_if_equals(id);
    }

    pub fn select(&mut self, id: BoxId) {
        self.selection.select(id);
    }

    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    /// Toggle a style on the selected box. Returns `false` (and records
    /// nothing) without a selection.
    pub fn toggle_style(&mut self, op: StyleOp) -> bool {
        let Some(id) = self.selection.current() else {
            log::trace!("toggle {}: nothing selected", op.name());
            return false;
        };
        self.commands
            .execute(&mut self.store, BoxMutation::ToggleStyle { id, op });
        true
    }

    /// Set the default family, and the selected box's family if any.
    /// Returns whether a history entry was recorded.
    pub fn set_font_family(&mut self, family: FontFamily) -> bool {
        self.defaults.font_family = family;
        let Some(id) = self.selection.current() else {
            log::trace!("font family {}: defaults only", family.name());
            return false;
        };
        self.commands
            .execute(&mut self.store, BoxMutation::SetFontFamily { id, family });
        true
    }

    /// Shift the default size by `delta` (floored at 1), and apply the new
    /// size to the selected box if any. Returns the new size.
    pub fn adjust_font_size(&mut self, delta: i32) -> u32 {
        let size = clamp_font_size(self.defaults.font_size, delta);
        self.defaults.font_size = size;
        match self.selection.current() {
            Some(id) => {
                self.commands
                    .execute(&mut self.store, BoxMutation::SetFontSize { id, size });
            }
            None => log::trace!("font size {size}: defaults only"),
        }
        size
    }

    /// Restore the document before the last command. Returns `false` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.commands.undo(&mut self.store).is_some();
        if undone {
            self.selection.retain_existing(self.store.document());
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.commands.redo(&mut self.store).is_some();
        if redone {
            self.selection.retain_existing(self.store.document());
        }
        redone
    }
}

fn committed_if(recorded: bool) -> Outcome {
    if recorded {
        Outcome::Committed
    } else {
        Outcome::Unchanged
    }
}

fn restored_if(restored: bool) -> Outcome {
    if restored {
        Outcome::Restored
    } else {
        Outcome::Unchanged
    }
}
