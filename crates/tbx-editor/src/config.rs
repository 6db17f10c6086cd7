//! Editor construction parameters.

use tbx_core::{DEFAULT_FONT_SIZE, EditDefaults, FontFamily};

/// Size of the canvas area boxes are dragged within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    pub default_font_size: u32,
    pub default_font_family: FontFamily,
    /// Undo depth bound. `None` keeps the whole session's history.
    pub history_limit: Option<usize>,
    pub canvas: CanvasBounds,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_font_size: DEFAULT_FONT_SIZE,
            default_font_family: FontFamily::Arial,
            history_limit: None,
            canvas: CanvasBounds::default(),
        }
    }
}

impl EditorConfig {
    pub fn defaults(&self) -> EditDefaults {
        EditDefaults::new(self.default_font_size, self.default_font_family)
    }
}
