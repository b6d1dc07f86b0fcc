//! choicepad - TUI file browser and text editor for ChoiceScript authoring
//!
//! Module structure:
//! - core: shared framework (Command, InputEvent)
//! - fs: filesystem provider contract (LocalFs, MemoryFs)
//! - kernel: workspace state core (AppState, Action, Effect, Store)
//! - scaffold: sample project provisioning
//! - services: configuration service
//! - views: explorer and editor views
//! - app: application layer (Workbench)
//! - tui: terminal integration (crossterm + ratatui)

pub mod core;
pub mod fs;
pub mod kernel;
pub mod logging;
pub mod scaffold;
pub mod services;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
