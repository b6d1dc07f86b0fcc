//! Shared framework module
//!
//! - Command: semantic commands (independent of concrete key bindings)
//! - InputEvent / Key: terminal input wrapping

pub mod command;
#[cfg(feature = "tui")]
pub mod event;

pub use command::Command;
#[cfg(feature = "tui")]
pub use event::{InputEvent, Key};
