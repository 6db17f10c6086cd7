//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s, then to
//! editor [`Action`]s. Single-key bindings (Delete, Escape) are only meant
//! to be routed here when focus is on the canvas, not inside a text area.

use crate::editor::Action;
use crate::input::InputEvent;
use tbx_core::{BoxId, StyleOp};

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Edit ──
    Undo,
    Redo,
    AddBox,
    /// Delete the selected box.
    Delete,
    Deselect,

    // ── Style ──
    Bold,
    Italic,
    Underline,
    CycleAlign,
    FontSizeUp,
    FontSizeDown,
}

impl ShortcutAction {
    /// The editor action this shortcut stands for, given the current
    /// selection. `Delete` with nothing selected maps to `None`.
    pub fn to_action(self, selected: Option<BoxId>) -> Option<Action> {
        Some(match self {
            ShortcutAction::Undo => Action::Undo,
            ShortcutAction::Redo => Action::Redo,
            ShortcutAction::AddBox => Action::AddBox,
            ShortcutAction::Delete => Action::Delete { id: selected? },
            ShortcutAction::Deselect => Action::Deselect,
            ShortcutAction::Bold => Action::ToggleStyle(StyleOp::Bold),
            ShortcutAction::Italic => Action::ToggleStyle(StyleOp::Italic),
            ShortcutAction::Underline => Action::ToggleStyle(StyleOp::Underline),
            ShortcutAction::CycleAlign => Action::ToggleStyle(StyleOp::Align),
            ShortcutAction::FontSizeUp => Action::AdjustFontSize(1),
            ShortcutAction::FontSizeDown => Action::AdjustFontSize(-1),
        })
    }
}

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘,
/// on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                // `+` is Shift+`=` on most layouts
                "+" => Some(ShortcutAction::FontSizeUp),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "b" | "B" => Some(ShortcutAction::Bold),
                "i" | "I" => Some(ShortcutAction::Italic),
                "u" | "U" => Some(ShortcutAction::Underline),
                "l" | "L" => Some(ShortcutAction::CycleAlign),
                "=" | "+" => Some(ShortcutAction::FontSizeUp),
                "-" => Some(ShortcutAction::FontSizeDown),
                "Enter" => Some(ShortcutAction::AddBox),
                _ => None,
            };
        }

        if shift {
            return None;
        }

        // ── Single keys (no modifiers) ──
        match key {
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Deselect),
            _ => None,
        }
    }

    /// Resolve a normalized key event. Pointer events never match.
    pub fn resolve_event(event: &InputEvent) -> Option<ShortcutAction> {
        match event {
            InputEvent::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => Self::resolve(key, *ctrl, *shift, *alt, *meta),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_undo_redo() {
        // Cmd+Z → Undo
        assert_eq!(
            ShortcutMap::resolve("z", false, false, false, true),
            Some(ShortcutAction::Undo)
        );
        // Ctrl+Z → Undo
        assert_eq!(
            ShortcutMap::resolve("z", true, false, false, false),
            Some(ShortcutAction::Undo)
        );
        // Cmd+Shift+Z → Redo
        assert_eq!(
            ShortcutMap::resolve("Z", false, true, false, true),
            Some(ShortcutAction::Redo)
        );
        // Ctrl+Y → Redo
        assert_eq!(
            ShortcutMap::resolve("y", true, false, false, false),
            Some(ShortcutAction::Redo)
        );
    }

    #[test]
    fn resolve_style_toggles() {
        assert_eq!(
            ShortcutMap::resolve("b", true, false, false, false),
            Some(ShortcutAction::Bold)
        );
        assert_eq!(
            ShortcutMap::resolve("i", false, false, false, true),
            Some(ShortcutAction::Italic)
        );
        assert_eq!(
            ShortcutMap::resolve("u", true, false, false, false),
            Some(ShortcutAction::Underline)
        );
        assert_eq!(
            ShortcutMap::resolve("l", true, false, false, false),
            Some(ShortcutAction::CycleAlign)
        );
    }

    #[test]
    fn resolve_font_size() {
        assert_eq!(
            ShortcutMap::resolve("=", false, false, false, true),
            Some(ShortcutAction::FontSizeUp)
        );
        assert_eq!(
            ShortcutMap::resolve("-", true, false, false, false),
            Some(ShortcutAction::FontSizeDown)
        );
    }

    #[test]
    fn resolve_plus_typed_with_shift() {
        assert_eq!(
            ShortcutMap::resolve("+", true, true, false, false),
            Some(ShortcutAction::FontSizeUp)
        );
        assert_eq!(
            ShortcutMap::resolve("+", false, true, false, true),
            Some(ShortcutAction::FontSizeUp)
        );
        assert_eq!(ShortcutMap::resolve("=", true, true, false, false), None);
    }

    #[test]
    fn resolve_event_matches_keys_only() {
        assert_eq!(
            ShortcutMap::resolve_event(&InputEvent::from_key("b", true, false, false, false)),
            Some(ShortcutAction::Bold)
        );
        assert_eq!(
            ShortcutMap::resolve_event(&InputEvent::from_pointer_up(1.0, 1.0)),
            None
        );
    }

    #[test]
    fn resolve_delete_and_escape() {
        assert_eq!(
            ShortcutMap::resolve("Backspace", false, false, false, false),
            Some(ShortcutAction::Delete)
        );
        assert_eq!(
            ShortcutMap::resolve("Escape", false, false, false, false),
            Some(ShortcutAction::Deselect)
        );
    }

    #[test]
    fn resolve_modifier_precedence() {
        assert_eq!(ShortcutMap::resolve("z", false, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("b", false, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("Delete", false, true, false, false), None);
    }

    #[test]
    fn delete_needs_selection() {
        let id = BoxId::intern("shortcut_box");
        assert_eq!(ShortcutAction::Delete.to_action(None), None);
        assert_eq!(
            ShortcutAction::Delete.to_action(Some(id)),
            Some(Action::Delete { id })
        );
        assert_eq!(
            ShortcutAction::FontSizeDown.to_action(None),
            Some(Action::AdjustFontSize(-1))
        );
    }
}
