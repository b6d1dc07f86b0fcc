//! View layer: render-only components driven by kernel state.

pub mod editor;
pub mod explorer;

pub use editor::EditorView;
pub use explorer::ExplorerView;
