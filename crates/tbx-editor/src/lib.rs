pub mod commands;
pub mod config;
pub mod drag;
pub mod editor;
pub mod input;
pub mod selection;
pub mod shortcuts;

pub use commands::CommandStack;
pub use config::{CanvasBounds, EditorConfig};
pub use editor::{Action, Editor, Outcome};
pub use selection::Selection;
