//! Drag tracker: turns a pointer gesture into one `Move` action.
//!
//! Intermediate pointer moves only update a preview position for the
//! renderer. The document changes once, on release, so a whole drag is a
//! single undo step.
//!
//! | Press on | Effect |
//! |----------|--------|
//! | drag handle | select the box, start a drag |
//! | text area | select the box, disable dragging until release |
//! | empty canvas | nothing |

use crate::config::CanvasBounds;
use crate::editor::Action;
use crate::input::{InputEvent, PointerTarget};
use tbx_core::{BoxId, Document, Position, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    /// Pointer is down inside a text area; drags are suppressed.
    Typing,
    Dragging {
        id: BoxId,
        /// Pointer offset from the box's top-left corner at press time.
        grab_dx: f32,
        grab_dy: f32,
        origin: Position,
        size: Size,
        current: Position,
    },
}

#[derive(Debug, Clone)]
pub struct DragTracker {
    state: DragState,
    bounds: CanvasBounds,
}

impl DragTracker {
    pub fn new(bounds: CanvasBounds) -> Self {
        Self {
            state: DragState::Idle,
            bounds,
        }
    }

    pub fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }

    /// `false` while the pointer is held inside a text area.
    pub fn drag_enabled(&self) -> bool {
        !matches!(self.state, DragState::Typing)
    }

    /// Box being dragged and where it should be drawn right now.
    pub fn preview(&self) -> Option<(BoxId, Position)> {
        match self.state {
            DragState::Dragging { id, current, .. } => Some((id, current)),
            _ => None,
        }
    }

    /// Feed one input event. Returns the actions it produces.
    pub fn handle(&mut self, event: &InputEvent, doc: &Document) -> Vec<Action> {
        match *event {
            InputEvent::PointerDown { x, y, target } => self.pointer_down(x, y, target, doc),
            InputEvent::PointerMove { x, y } => {
                self.track(x, y);
                vec![]
            }
            InputEvent::PointerUp { x, y } => {
                self.track(x, y);
                self.release()
            }
            InputEvent::Key { .. } => vec![],
        }
    }

    /// Abandon any gesture in progress without moving anything.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    fn pointer_down(&mut self, x: f32, y: f32, target: PointerTarget, doc: &Document) -> Vec<Action> {
        match target {
            PointerTarget::Canvas => {
                self.state = DragState::Idle;
                vec![]
            }
            PointerTarget::TextArea(id) => {
                self.state = DragState::Typing;
                vec![Action::Select { id }]
            }
            PointerTarget::DragHandle(id) => {
                let Some(b) = doc.get(id) else {
                    log::trace!("drag: no box {id}");
                    self.state = DragState::Idle;
                    return vec![];
                };
                self.state = DragState::Dragging {
                    id,
                    grab_dx: x - b.position.x,
                    grab_dy: y - b.position.y,
                    origin: b.position,
                    size: b.size,
                    current: b.position,
                };
                vec![Action::Select { id }]
            }
        }
    }

    fn track(&mut self, x: f32, y: f32) {
        let bounds = self.bounds;
        if let DragState::Dragging {
            grab_dx,
            grab_dy,
            size,
            ref mut current,
            ..
        } = self.state
        {
            *current = clamp_to_parent(Position::new(x - grab_dx, y - grab_dy), size, bounds);
        }
    }

    fn release(&mut self) -> Vec<Action> {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        match state {
            DragState::Dragging {
                id,
                origin,
                current,
                ..
            } if current != origin => vec![Action::Move {
                id,
                x: current.x,
                y: current.y,
            }],
            _ => vec![],
        }
    }
}

/// Keep a box of `size` fully inside the canvas.
pub fn clamp_to_parent(pos: Position, size: Size, bounds: CanvasBounds) -> Position {
    let max_x = (bounds.width - size.width).max(0.0);
    let max_y = (bounds.height - size.height).max(0.0);
    Position::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
}
