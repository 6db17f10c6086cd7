//! Input abstraction layer.
//!
//! Normalizes pointer and keyboard events from the front end into a
//! unified `InputEvent` enum consumed by the drag tracker and the
//! shortcut map.

use tbx_core::BoxId;

/// What the pointer was over when it went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas.
    Canvas,
    /// A box's text area. Typing and text selection happen here.
    TextArea(BoxId),
    /// A box's move handle.
    DragHandle(BoxId),
}

/// A normalized input event, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32, target: PointerTarget },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32, target: PointerTarget) -> Self {
        Self::PointerDown { x, y, target }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    pub fn from_key(key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Self::Key {
            key: key.to_string(),
            ctrl,
            shift,
            alt,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_fields() {
        let id = BoxId::intern("input_box");
        assert_eq!(
            InputEvent::from_pointer_down(1.0, 2.0, PointerTarget::DragHandle(id)),
            InputEvent::PointerDown {
                x: 1.0,
                y: 2.0,
                target: PointerTarget::DragHandle(id),
            }
        );
        assert_eq!(
            InputEvent::from_key("z", true, false, false, false),
            InputEvent::Key {
                key: "z".into(),
                ctrl: true,
                shift: false,
                alt: false,
                meta: false,
            }
        );
    }
}
