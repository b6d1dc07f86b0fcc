use crate::core::Command;

use super::workspace::is_text_file;
use super::{Action, AppState, Effect, FocusTarget, Notice};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::EditBuffer(text) => {
                DispatchResult::changed(self.state.workspace.edit_active(text))
            }
            Action::ExplorerSetViewHeight { height } => {
                DispatchResult::changed(self.state.ui.explorer.set_view_height(height))
            }
            Action::DirLoaded { path, entries } => {
                self.state.workspace.set_listing(path, entries);
                self.state.ui.explorer.reset();
                DispatchResult::changed(true)
            }
            Action::DirLoadFailed { path } => {
                tracing::warn!(path = %path.display(), "directory load failed");
                self.state.ui.notice = Some(Notice::error("Failed to load directory"));
                DispatchResult::changed(true)
            }
            Action::DocLoaded {
                path,
                name,
                content,
            } => {
                self.state.workspace.insert_document(path, name, content);
                self.state.ui.focus = FocusTarget::Editor;
                DispatchResult::changed(true)
            }
            Action::DocLoadFailed { path } => {
                tracing::warn!(path = %path.display(), "file load failed");
                self.state.ui.notice = Some(Notice::error("Failed to open file"));
                DispatchResult::changed(true)
            }
            Action::SaveCompleted { path } => {
                self.state.workspace.mark_saved(&path);
                self.state.ui.notice = Some(Notice::info("File saved successfully"));
                DispatchResult::changed(true)
            }
            Action::SaveFailed { path } => {
                tracing::warn!(path = %path.display(), "file save failed");
                self.state.ui.notice = Some(Notice::error("Failed to save file"));
                DispatchResult::changed(true)
            }
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        match command {
            Command::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult::changed(true)
            }
            Command::DismissNotice => {
                DispatchResult::changed(self.state.ui.notice.take().is_some())
            }
            Command::FocusExplorer => {
                let changed = self.state.ui.focus != FocusTarget::Explorer;
                self.state.ui.focus = FocusTarget::Explorer;
                DispatchResult::changed(changed)
            }
            Command::FocusEditor => {
                let changed = self.state.ui.focus != FocusTarget::Editor;
                self.state.ui.focus = FocusTarget::Editor;
                DispatchResult::changed(changed)
            }
            Command::Save => match self.state.workspace.active_path() {
                Some(path) => DispatchResult::effect(Effect::WriteFile {
                    path: path.to_path_buf(),
                    content: self.state.workspace.active_buffer().to_string(),
                }),
                None => DispatchResult::changed(false),
            },
            Command::CloseTab => match self.state.workspace.active_path() {
                Some(path) => {
                    let path = path.to_path_buf();
                    DispatchResult::changed(self.state.workspace.close_document(&path))
                }
                None => DispatchResult::changed(false),
            },
            Command::NextTab => DispatchResult::changed(self.state.workspace.cycle_active(1)),
            Command::PrevTab => DispatchResult::changed(self.state.workspace.cycle_active(-1)),
            Command::ExplorerUp => self.explorer_move(-1),
            Command::ExplorerDown => self.explorer_move(1),
            Command::ExplorerPageUp => {
                let page = self.state.ui.explorer.view_height.max(1) as isize;
                self.explorer_move(-page)
            }
            Command::ExplorerPageDown => {
                let page = self.state.ui.explorer.view_height.max(1) as isize;
                self.explorer_move(page)
            }
            Command::ExplorerActivate => self.explorer_activate(),
            Command::ExplorerGoRoot => {
                DispatchResult::effect(Effect::LoadDir(self.state.root.clone()))
            }
            // Edit and cursor commands are resolved by the editor view into
            // Action::EditBuffer; they carry no meaning at the store level.
            other => {
                tracing::debug!(command = other.name(), "command ignored by store");
                DispatchResult::changed(false)
            }
        }
    }

    fn explorer_move(&mut self, delta: isize) -> DispatchResult {
        let len = self.state.workspace.entries().len();
        DispatchResult::changed(self.state.ui.explorer.move_selection(delta, len))
    }

    fn explorer_activate(&mut self) -> DispatchResult {
        let Some(entry) = self
            .state
            .workspace
            .entry(self.state.ui.explorer.selected)
            .cloned()
        else {
            return DispatchResult::changed(false);
        };

        if entry.is_dir {
            return DispatchResult::effect(Effect::LoadDir(entry.path));
        }

        if !is_text_file(&entry.name) {
            self.state.ui.notice = Some(Notice::error("Only plain-text (.txt) files can be opened"));
            return DispatchResult::changed(true);
        }

        if self.state.workspace.is_open(&entry.path) {
            self.state.workspace.switch_active(&entry.path);
            self.state.ui.focus = FocusTarget::Editor;
            return DispatchResult::changed(true);
        }

        DispatchResult::effect(Effect::LoadFile {
            path: entry.path,
            name: entry.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::DirEntry;
    use std::path::{Path, PathBuf};

    fn store() -> Store {
        Store::new(AppState::new(PathBuf::from("/root")))
    }

    fn loaded_store() -> Store {
        let mut store = store();
        store.dispatch(Action::DirLoaded {
            path: PathBuf::from("/root"),
            entries: vec![
                DirEntry::new(PathBuf::from("/root/game"), true),
                DirEntry::new(PathBuf::from("/root/startup.txt"), false),
                DirEntry::new(PathBuf::from("/root/cover.png"), false),
            ],
        });
        store
    }

    #[test]
    fn test_quit() {
        let mut store = store();
        let result = store.dispatch(Action::RunCommand(Command::Quit));
        assert!(result.state_changed);
        assert!(store.state().ui.should_quit);
    }

    #[test]
    fn test_activate_dir_emits_load_dir() {
        let mut store = loaded_store();
        let result = store.dispatch(Action::RunCommand(Command::ExplorerActivate));
        assert_eq!(
            result.effects,
            vec![Effect::LoadDir(PathBuf::from("/root/game"))]
        );
    }

    #[test]
    fn test_activate_text_file_emits_load_file() {
        let mut store = loaded_store();
        store.dispatch(Action::RunCommand(Command::ExplorerDown));
        let result = store.dispatch(Action::RunCommand(Command::ExplorerActivate));
        assert_eq!(
            result.effects,
            vec![Effect::LoadFile {
                path: PathBuf::from("/root/startup.txt"),
                name: "startup.txt".to_string(),
            }]
        );
    }

    #[test]
    fn test_activate_binary_file_notifies() {
        let mut store = loaded_store();
        store.dispatch(Action::RunCommand(Command::ExplorerDown));
        store.dispatch(Action::RunCommand(Command::ExplorerDown));
        let result = store.dispatch(Action::RunCommand(Command::ExplorerActivate));
        assert!(result.effects.is_empty());
        assert!(store.state().ui.notice.is_some());
    }

    #[test]
    fn test_activate_open_file_reuses_document() {
        let mut store = loaded_store();
        store.dispatch(Action::DocLoaded {
            path: PathBuf::from("/root/startup.txt"),
            name: "startup.txt".into(),
            content: "A".into(),
        });
        store.dispatch(Action::EditBuffer("edited".into()));

        store.dispatch(Action::RunCommand(Command::ExplorerDown));
        let result = store.dispatch(Action::RunCommand(Command::ExplorerActivate));

        // No reload effect; the in-memory document wins.
        assert!(result.effects.is_empty());
        assert_eq!(store.state().workspace.open_docs().len(), 1);
        assert_eq!(store.state().workspace.active_buffer(), "edited");
    }

    #[test]
    fn test_dir_load_failure_retains_listing() {
        let mut store = loaded_store();
        let before = store.state().workspace.entries().len();
        store.dispatch(Action::DirLoadFailed {
            path: PathBuf::from("/root/game"),
        });
        assert_eq!(store.state().workspace.entries().len(), before);
        assert!(store.state().ui.notice.is_some());
    }

    #[test]
    fn test_save_emits_write_with_buffer() {
        let mut store = store();
        store.dispatch(Action::DocLoaded {
            path: PathBuf::from("/root/startup.txt"),
            name: "startup.txt".into(),
            content: "A".into(),
        });
        store.dispatch(Action::EditBuffer("B".into()));

        let result = store.dispatch(Action::RunCommand(Command::Save));
        assert_eq!(
            result.effects,
            vec![Effect::WriteFile {
                path: PathBuf::from("/root/startup.txt"),
                content: "B".to_string(),
            }]
        );

        store.dispatch(Action::SaveCompleted {
            path: PathBuf::from("/root/startup.txt"),
        });
        assert!(!store.state().workspace.active_document().unwrap().modified);
    }

    #[test]
    fn test_save_failure_keeps_modified() {
        let mut store = store();
        store.dispatch(Action::DocLoaded {
            path: PathBuf::from("/root/startup.txt"),
            name: "startup.txt".into(),
            content: "A".into(),
        });
        store.dispatch(Action::EditBuffer("B".into()));
        store.dispatch(Action::SaveFailed {
            path: PathBuf::from("/root/startup.txt"),
        });

        let doc = store.state().workspace.active_document().unwrap();
        assert!(doc.modified);
        assert_eq!(doc.content, "B");
    }

    #[test]
    fn test_save_without_active_is_noop() {
        let mut store = store();
        let result = store.dispatch(Action::RunCommand(Command::Save));
        assert!(result.effects.is_empty());
        assert!(!result.state_changed);
    }

    #[test]
    fn test_go_root_emits_load_dir() {
        let mut store = loaded_store();
        let result = store.dispatch(Action::RunCommand(Command::ExplorerGoRoot));
        assert_eq!(result.effects, vec![Effect::LoadDir(PathBuf::from("/root"))]);
    }

    #[test]
    fn test_close_tab_closes_active() {
        let mut store = store();
        store.dispatch(Action::DocLoaded {
            path: PathBuf::from("/root/a.txt"),
            name: "a.txt".into(),
            content: "A".into(),
        });
        store.dispatch(Action::RunCommand(Command::CloseTab));
        assert!(store.state().workspace.active_path().is_none());
        assert_eq!(store.state().workspace.active_buffer(), "");
    }

    #[test]
    fn test_doc_loaded_focuses_editor() {
        let mut store = store();
        store.dispatch(Action::RunCommand(Command::FocusExplorer));
        store.dispatch(Action::DocLoaded {
            path: PathBuf::from("/root/a.txt"),
            name: "a.txt".into(),
            content: "A".into(),
        });
        assert_eq!(store.state().ui.focus, FocusTarget::Editor);
        assert_eq!(
            store.state().workspace.active_path(),
            Some(Path::new("/root/a.txt"))
        );
    }

    #[test]
    fn test_dismiss_notice() {
        let mut store = store();
        store.dispatch(Action::SaveFailed {
            path: PathBuf::from("/root/a.txt"),
        });
        assert!(store.state().ui.notice.is_some());
        store.dispatch(Action::RunCommand(Command::DismissNotice));
        assert!(store.state().ui.notice.is_none());
    }
}
