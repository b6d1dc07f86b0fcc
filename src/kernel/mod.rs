//! Workspace state kernel.
//!
//! The kernel owns all application state and transitions it through
//! `Store::dispatch(Action)`. Filesystem work leaves the kernel as `Effect`
//! values and comes back as result actions; no I/O happens in here.

pub mod action;
pub mod effect;
pub mod state;
pub mod store;
pub mod workspace;

pub use action::Action;
pub use effect::Effect;
pub use state::{AppState, ExplorerUiState, FocusTarget, Notice, NoticeKind, UiState};
pub use store::{DispatchResult, Store};
pub use workspace::{is_text_file, OpenDocument, WorkspaceState, TEXT_EXTENSIONS};
