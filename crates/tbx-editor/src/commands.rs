//! Undo/Redo command stack.
//!
//! Every mutation goes through [`CommandStack::execute`], which records a
//! full copy of the document *before* applying it. Undo and redo swap the
//! current document with the top of the opposite stack, so each step
//! restores the whole document rather than replaying an inverse.
//!
//! Only the document is recorded. Selection and editing defaults live
//! outside the store and are never touched by undo/redo.

use tbx_core::{BoxId, BoxMutation, Document, DocumentStore};

/// One history entry: the document as it was on one side of a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub document: Document,
    pub description: String,
}

/// Manages undo/redo stacks of whole-document snapshots.
#[derive(Debug, Clone, Default)]
pub struct CommandStack {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Maximum undo depth. `None` keeps every snapshot.
    max_depth: Option<usize>,
}

impl CommandStack {
    /// An unbounded stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack that drops its oldest snapshot beyond `max_depth` entries.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }

    /// Record the current document, clear redo, then apply `mutation`.
    ///
    /// Always records exactly one snapshot, even if the mutation turns out
    /// to be a no-op (unknown id). Returns the id of a newly added box.
    pub fn execute(&mut self, store: &mut DocumentStore, mutation: BoxMutation) -> Option<BoxId> {
        let description = mutation.describe();
        self.record(store, &description);
        log::debug!("execute: {description}");
        store.apply_mutation(mutation)
    }

    /// Record the current document as one undo step without applying
    /// anything. The caller mutates the store right after.
    pub fn record(&mut self, store: &DocumentStore, description: &str) {
        self.undo_stack.push(Snapshot {
            document: store.document().clone(),
            description: description.to_string(),
        });
        if let Some(max) = self.max_depth
            && self.undo_stack.len() > max
        {
            let excess = self.undo_stack.len() - max;
            self.undo_stack.drain(..excess);
        }
        // Clear redo stack on new action
        self.redo_stack.clear();
    }

    /// Restore the previous document. Returns the undone command's
    /// description, or `None` if there was nothing to undo.
    pub fn undo(&mut self, store: &mut DocumentStore) -> Option<String> {
        let Some(previous) = self.undo_stack.pop() else {
            log::trace!("undo: stack empty");
            return None;
        };
        let current = store.replace_document(previous.document);
        log::debug!("undo: {}", previous.description);
        self.redo_stack.push(Snapshot {
            document: current,
            description: previous.description.clone(),
        });
        Some(previous.description)
    }

    /// Re-apply the last undone command by restoring the document it
    /// produced.
    pub fn redo(&mut self, store: &mut DocumentStore) -> Option<String> {
        let Some(next) = self.redo_stack.pop() else {
            log::trace!("redo: stack empty");
            return None;
        };
        let current = store.replace_document(next.document);
        log::debug!("redo: {}", next.description);
        self.undo_stack.push(Snapshot {
            document: current,
            description: next.description.clone(),
        });
        Some(next.description)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forget all history. The current document is kept.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tbx_core::{Style, StyleOp};

    fn add(stack: &mut CommandStack, store: &mut DocumentStore) -> BoxId {
        stack
            .execute(
                store,
                BoxMutation::AddBox {
                    style: Style::default(),
                },
            )
            .unwrap()
    }

    #[test]
    fn undo_redo_move() {
        let mut store = DocumentStore::new();
        let mut stack = CommandStack::new();
        let id = add(&mut stack, &mut store);

        stack.execute(
            &mut store,
            BoxMutation::MoveBox {
                id,
                x: 50.0,
                y: 30.0,
            },
        );
        assert_eq!(store.get(id).unwrap().position.x, 50.0);

        let desc = stack.undo(&mut store);
        assert_eq!(desc.as_deref(), Some("move tb_0 to (50, 30)"));
        assert_eq!(store.get(id).unwrap().position.x, 0.0);

        let desc = stack.redo(&mut store);
        assert_eq!(desc.as_deref(), Some("move tb_0 to (50, 30)"));
        assert_eq!(store.get(id).unwrap().position.x, 50.0);
    }

    #[test]
    fn redo_clears_on_new_action() {
        let mut store = DocumentStore::new();
        let mut stack = CommandStack::new();
        let id = add(&mut stack, &mut store);

        stack.execute(&mut store, BoxMutation::MoveBox { id, x: 5.0, y: 0.0 });
        stack.undo(&mut store);
        assert!(stack.can_redo());

        // New action clears redo
        stack.execute(&mut store, BoxMutation::MoveBox { id, x: 1.0, y: 0.0 });
        assert!(!stack.can_redo());
        assert_eq!(stack.redo(&mut store), None);
    }

    #[test]
    fn stacks_shrink_by_one_per_step() {
        let mut store = DocumentStore::new();
        let mut stack = CommandStack::new();
        add(&mut stack, &mut store);
        add(&mut stack, &mut store);
        assert_eq!((stack.undo_depth(), stack.redo_depth()), (2, 0));

        stack.undo(&mut store);
        assert_eq!((stack.undo_depth(), stack.redo_depth()), (1, 1));
        stack.undo(&mut store);
        assert_eq!((stack.undo_depth(), stack.redo_depth()), (0, 2));
        stack.redo(&mut store);
        assert_eq!((stack.undo_depth(), stack.redo_depth()), (1, 1));
    }

    #[test]
    fn max_depth_trims_oldest() {
        let mut store = DocumentStore::new();
        let mut stack = CommandStack::with_max_depth(3);
        for _ in 0..5 {
            add(&mut stack, &mut store);
        }
        // Only 3 entries remain
        let mut undo_count = 0;
        while stack.undo(&mut store).is_some() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_id_still_records_one_step() {
        let mut store = DocumentStore::new();
        let mut stack = CommandStack::new();
        stack.execute(
            &mut store,
            BoxMutation::ToggleStyle {
                id: BoxId::intern("missing"),
                op: StyleOp::Bold,
            },
        );
        assert_eq!(stack.undo_depth(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_add_roundtrip() {
        let mut store = DocumentStore::new();
        let mut stack = CommandStack::new();
        let id = add(&mut stack, &mut store);
        stack.execute(&mut store, BoxMutation::SetText { id, text: "kept".into() });

        stack.execute(&mut store, BoxMutation::RemoveBox { id });
        assert!(store.get(id).is_none());

        // Undo → the box comes back with its text
        stack.undo(&mut store);
        assert_eq!(store.get(id).unwrap().text, "kept");
    }

    #[test]
    fn clear_forgets_history_but_keeps_document() {
        let mut store = DocumentStore::new();
        let mut stack = CommandStack::new();
        add(&mut stack, &mut store);
        stack.undo(&mut store);
        add(&mut stack, &mut store);
        stack.clear();
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert_eq!(store.len(), 1);
    }
}
