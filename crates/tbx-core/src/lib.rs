pub mod id;
pub mod model;
pub mod store;
pub mod style;

pub use id::{BoxId, IdAllocator};
pub use model::*;
pub use store::{BoxMutation, DocumentStore};
pub use style::{EditDefaults, StyleOp};
