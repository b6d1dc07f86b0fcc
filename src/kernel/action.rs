use std::path::PathBuf;

use crate::core::Command;
use crate::fs::DirEntry;

/// Inbound API of the kernel: every user intent and every completed
/// filesystem operation arrives as one of these.
#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    /// Full-replace edit of the active buffer (write-through, per keystroke).
    EditBuffer(String),
    /// Rendered height of the explorer viewport, reported by the view.
    ExplorerSetViewHeight {
        height: usize,
    },
    DirLoaded {
        path: PathBuf,
        entries: Vec<DirEntry>,
    },
    DirLoadFailed {
        path: PathBuf,
    },
    DocLoaded {
        path: PathBuf,
        name: String,
        content: String,
    },
    DocLoadFailed {
        path: PathBuf,
    },
    SaveCompleted {
        path: PathBuf,
    },
    SaveFailed {
        path: PathBuf,
    },
}
