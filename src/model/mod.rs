//! Family tree graph: people, parent links, selection and edits.

mod editor;
mod mutation;
pub mod relations;
mod selection;
mod store;
mod types;

pub use editor::{Command, TreeEditor};
pub use mutation::PLACEMENT_RANGE;
pub use relations::Relations;
pub use selection::{EditBuffer, Selection, SelectionController};
pub use store::GraphStore;
pub use types::{DEFAULT_COLOR, Edge, Gender, MARRIED_COLOR, Marker, Node, Position};
