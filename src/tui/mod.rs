//! Terminal integration (crossterm + ratatui).
//!
//! Kept separate from `kernel` so the core state machine never depends on
//! terminal crates.

pub mod terminal_guard;

pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};

#[cfg(unix)]
pub use terminal_guard::install_termination_signals;
