//! WASM bridge for TBX — exposes the editor command surface to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page renders from
//! `state_json()` after every call that reports a change.

use tbx_core::{BoxId, FontFamily, StyleOp};
use tbx_editor::drag::DragTracker;
use tbx_editor::input::{InputEvent, PointerTarget};
use tbx_editor::shortcuts::ShortcutMap;
use tbx_editor::{Action, CanvasBounds, Editor, EditorConfig, Outcome};
use wasm_bindgen::prelude::*;

/// The main WASM-facing canvas controller.
///
/// Holds the editor and the drag tracker. All interaction from the page
/// goes through this struct.
#[wasm_bindgen]
pub struct TbxCanvas {
    editor: Editor,
    drag: DragTracker,
}

#[wasm_bindgen]
impl TbxCanvas {
    /// Create a controller for a canvas of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();

        let canvas = CanvasBounds {
            width: width as f32,
            height: height as f32,
        };
        let editor = Editor::with_config(EditorConfig {
            canvas,
            ..EditorConfig::default()
        });
        Self {
            editor,
            drag: DragTracker::new(canvas),
        }
    }

    /// Update the canvas bounds after the page resizes.
    pub fn resize(&mut self, width: f64, height: f64) {
        let canvas = CanvasBounds {
            width: width as f32,
            height: height as f32,
        };
        self.editor.set_canvas(canvas);
        self.drag.set_bounds(canvas);
    }

    // ─── Commands ────────────────────────────────────────────────────────

    /// Add a box with the current defaults. Returns its id.
    pub fn add_box(&mut self) -> String {
        self.editor.add_box().as_str().to_string()
    }

    pub fn edit_text(&mut self, box_id: &str, text: &str) {
        self.editor.edit_text(BoxId::intern(box_id), text);
    }

    pub fn move_box(&mut self, box_id: &str, x: f64, y: f64) {
        self.editor
            .move_box(BoxId::intern(box_id), x as f32, y as f32);
    }

    pub fn delete_box(&mut self, box_id: &str) {
        self.editor.delete(BoxId::intern(box_id));
    }

    /// Select a box by id. An empty id clears the selection.
    pub fn select_box(&mut self, box_id: &str) {
        if box_id.is_empty() {
            self.editor.deselect();
        } else {
            self.editor.select(BoxId::intern(box_id));
        }
    }

    /// Apply a toolbar toggle (`bold`, `italic`, `underline`, `align`).
    /// Returns `true` if the selected box changed.
    pub fn toggle_style(&mut self, op: &str) -> bool {
        match StyleOp::from_name(op) {
            Some(op) => self.editor.toggle_style(op),
            None => {
                log::trace!("unknown style op `{op}`");
                false
            }
        }
    }

    /// Set the font family by CSS name. Returns `false` for a family
    /// outside the allowed set.
    pub fn set_font_family(&mut self, name: &str) -> bool {
        match FontFamily::from_name(name) {
            Some(family) => {
                self.editor.set_font_family(family);
                true
            }
            None => false,
        }
    }

    /// Returns the new default font size.
    pub fn adjust_font_size(&mut self, delta: i32) -> u32 {
        self.editor.adjust_font_size(delta)
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    // ─── Pointer & keyboard ──────────────────────────────────────────────

    /// Pointer pressed. `target` is `"handle"`, `"text"`, or anything else
    /// for empty canvas. Returns `true` if state changed.
    pub fn pointer_down(&mut self, x: f64, y: f64, target: &str, box_id: &str) -> bool {
        let id = BoxId::intern(box_id);
        let target = match target {
            "handle" => PointerTarget::DragHandle(id),
            "text" => PointerTarget::TextArea(id),
            _ => PointerTarget::Canvas,
        };
        self.feed(InputEvent::from_pointer_down(x as f32, y as f32, target))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.feed(InputEvent::from_pointer_move(x as f32, y as f32))
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.feed(InputEvent::from_pointer_up(x as f32, y as f32))
    }

    /// Pointer left the page or the gesture was interrupted. Drops any
    /// drag in progress without moving the box.
    pub fn pointer_cancel(&mut self) -> bool {
        let dragging = self.drag.preview().is_some();
        self.drag.cancel();
        dragging
    }

    /// Whether the page should let the current pointer start a drag.
    pub fn drag_enabled(&self) -> bool {
        self.drag.drag_enabled()
    }

    /// Handle a keyboard event. Returns `true` if anything changed.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> bool {
        let event = InputEvent::from_key(key, ctrl, shift, alt, meta);
        let Some(shortcut) = ShortcutMap::resolve_event(&event) else {
            return false;
        };
        let Some(action) = shortcut.to_action(self.editor.selected()) else {
            return false;
        };
        let deselect = matches!(action, Action::Deselect);
        let changed = self.editor.dispatch(action) != Outcome::Unchanged;
        changed || deselect
    }

    // ─── Rendering data ──────────────────────────────────────────────────

    /// All boxes as a JSON array, in z-order.
    pub fn boxes_json(&self) -> String {
        self.editor.document().to_json()
    }

    /// Full view state for the page: boxes (with any live drag preview
    /// applied), selection, defaults, toolbar alignment, and history flags.
    pub fn state_json(&self) -> String {
        let mut boxes = self.editor.boxes().to_vec();
        if let Some((id, pos)) = self.drag.preview()
            && let Some(b) = boxes.iter_mut().find(|b| b.id == id)
        {
            b.position = pos;
        }
        let state = serde_json::json!({
            "boxes": boxes,
            "selectedId": self.editor.selected().map(|id| id.as_str().to_string()),
            "defaults": self.editor.defaults(),
            "alignment": self.editor.selected_alignment().as_str(),
            "canUndo": self.editor.can_undo(),
            "canRedo": self.editor.can_redo(),
        });
        state.to_string()
    }

    /// The allowed font families, as a JSON array of CSS names.
    pub fn font_families_json() -> String {
        let names: Vec<&str> = FontFamily::ALL.iter().map(|f| f.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }
}

impl TbxCanvas {
    fn feed(&mut self, event: InputEvent) -> bool {
        let actions = self.drag.handle(&event, self.editor.document());
        let changed = !actions.is_empty() || self.drag.preview().is_some();
        for action in actions {
            self.editor.dispatch(action);
        }
        changed
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("TBX WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
