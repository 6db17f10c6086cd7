//! Single-box selection.

use tbx_core::{BoxId, Document};

/// At most one active box. Style and font commands target it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<BoxId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`. Not validated: callers only offer ids of rendered boxes.
    pub fn select(&mut self, id: BoxId) {
        self.selected = Some(id);
    }

    pub fn current(&self) -> Option<BoxId> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Clear the selection if it points at `id`. Called on delete.
    pub fn clear_if_equals(&mut self, id: BoxId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Drop a selection whose box is no longer in `doc`.
    pub fn retain_existing(&mut self, doc: &Document) {
        if let Some(id) = self.selected
            && !doc.contains(id)
        {
            log::trace!("selection {id} no longer exists, clearing");
            self.selected = None;
        }
    }
}
