pub mod api;
pub mod errors;
pub mod render;
pub mod structure;

pub use api::{print_structure, UitlegError};
pub use structure::ProjectStructure;
