use std::path::PathBuf;

use super::workspace::WorkspaceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Explorer,
    Editor,
}

impl Default for FocusTarget {
    fn default() -> Self {
        FocusTarget::Editor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Blocking user-facing notification. While one is visible the workbench
/// swallows all input except dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Explorer viewport state: selection index into the current listing plus
/// scroll offset. Reset whenever the listing is replaced.
#[derive(Debug, Default)]
pub struct ExplorerUiState {
    pub selected: usize,
    pub scroll: usize,
    pub view_height: usize,
}

impl ExplorerUiState {
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll = 0;
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let changed = self.view_height != height;
        self.view_height = height;
        changed
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let prev = self.selected;
        let max = len - 1;
        self.selected = if delta >= 0 {
            self.selected.saturating_add(delta as usize).min(max)
        } else {
            self.selected.saturating_sub((-delta) as usize)
        };
        self.scroll_to_selection();
        self.selected != prev
    }

    fn scroll_to_selection(&mut self) {
        if self.view_height == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.view_height {
            self.scroll = self.selected + 1 - self.view_height;
        }
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    pub focus: FocusTarget,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    pub explorer: ExplorerUiState,
}

pub struct AppState {
    pub root: PathBuf,
    pub workspace: WorkspaceState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        let workspace = WorkspaceState::new(root.clone());
        Self {
            root,
            workspace,
            ui: UiState::default(),
        }
    }
}
