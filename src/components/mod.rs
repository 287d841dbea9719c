//! UI Components
//!
//! Reusable Leptos components.

mod media_box;
mod sequence_workspace;

pub use media_box::{activate_draggables, GalleryBox, MediaBox};
pub use sequence_workspace::SequenceWorkspace;
