//! Service layer.
//!
//! - config: editor configuration backed by a JSON settings file

pub mod config;

pub use config::{EditorConfig, Settings};
