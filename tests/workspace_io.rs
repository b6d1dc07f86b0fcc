//! End-to-end workspace flows against a real filesystem.

use std::path::PathBuf;

use tempfile::TempDir;

use choicepad::core::Command;
use choicepad::fs::{FileProvider, LocalFs};
use choicepad::kernel::{Action, AppState, Effect, Store};
use choicepad::scaffold::{
    ensure_sample_project, SAMPLE_PROJECT_DIR, STARTUP_CONTENT, STARTUP_FILE, STATS_FILE,
};

/// Dispatches an action and runs every resulting filesystem effect, feeding
/// the outcomes back into the store until the queue drains.
fn pump(store: &mut Store, provider: &dyn FileProvider, action: Action) {
    let mut result = store.dispatch(action);
    while let Some(effect) = result.effects.pop() {
        let follow_up = match effect {
            Effect::LoadDir(path) => match provider.read_dir(&path) {
                Ok(entries) => Action::DirLoaded { path, entries },
                Err(_) => Action::DirLoadFailed { path },
            },
            Effect::LoadFile { path, name } => match provider.read_file(&path) {
                Ok(content) => Action::DocLoaded {
                    path,
                    name,
                    content,
                },
                Err(_) => Action::DocLoadFailed { path },
            },
            Effect::WriteFile { path, content } => match provider.write_file(&path, &content) {
                Ok(()) => Action::SaveCompleted { path },
                Err(_) => Action::SaveFailed { path },
            },
        };
        result.effects.extend(store.dispatch(follow_up).effects);
    }
}

fn run(store: &mut Store, provider: &dyn FileProvider, command: Command) {
    pump(store, provider, Action::RunCommand(command));
}

fn setup() -> (TempDir, LocalFs, Store) {
    let dir = TempDir::new().unwrap();
    let provider = LocalFs::new();
    assert!(ensure_sample_project(&provider, dir.path()).unwrap());

    let mut store = Store::new(AppState::new(dir.path().to_path_buf()));
    run(&mut store, &provider, Command::ExplorerGoRoot);
    (dir, provider, store)
}

#[test]
fn open_edit_save_roundtrip() {
    let (dir, provider, mut store) = setup();

    // Root listing holds only the provisioned sample project.
    let entries = store.state().workspace.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, SAMPLE_PROJECT_DIR);
    assert!(entries[0].is_dir);

    // Enter the project: files sorted by name, stats before startup.
    run(&mut store, &provider, Command::ExplorerActivate);
    let names: Vec<&str> = store
        .state()
        .workspace
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec![STATS_FILE, STARTUP_FILE]);

    run(&mut store, &provider, Command::ExplorerDown);
    run(&mut store, &provider, Command::ExplorerActivate);
    assert_eq!(store.state().workspace.active_buffer(), STARTUP_CONTENT);

    pump(
        &mut store,
        &provider,
        Action::EditBuffer("*title Rewritten".to_string()),
    );
    assert!(store.state().workspace.active_document().unwrap().modified);

    run(&mut store, &provider, Command::Save);
    assert!(!store.state().workspace.active_document().unwrap().modified);

    let on_disk = provider
        .read_file(&dir.path().join(SAMPLE_PROJECT_DIR).join(STARTUP_FILE))
        .unwrap();
    assert_eq!(on_disk, "*title Rewritten");
}

#[test]
fn reopen_after_close_reads_from_disk() {
    let (dir, provider, mut store) = setup();
    let startup_path = dir.path().join(SAMPLE_PROJECT_DIR).join(STARTUP_FILE);

    run(&mut store, &provider, Command::ExplorerActivate);
    run(&mut store, &provider, Command::ExplorerDown);
    run(&mut store, &provider, Command::ExplorerActivate);

    pump(
        &mut store,
        &provider,
        Action::EditBuffer("unsaved".to_string()),
    );
    run(&mut store, &provider, Command::CloseTab);
    assert!(store.state().workspace.open_docs().is_empty());

    // The unsaved edit is gone; reopening reloads the disk content.
    run(&mut store, &provider, Command::FocusExplorer);
    run(&mut store, &provider, Command::ExplorerActivate);
    assert_eq!(store.state().workspace.active_buffer(), STARTUP_CONTENT);
    assert_eq!(provider.read_file(&startup_path).unwrap(), STARTUP_CONTENT);
}

#[test]
fn sample_project_is_provisioned_once() {
    let dir = TempDir::new().unwrap();
    let provider = LocalFs::new();
    let startup_path = dir.path().join(SAMPLE_PROJECT_DIR).join(STARTUP_FILE);

    assert!(ensure_sample_project(&provider, dir.path()).unwrap());
    provider.write_file(&startup_path, "user content").unwrap();

    assert!(!ensure_sample_project(&provider, dir.path()).unwrap());
    assert_eq!(provider.read_file(&startup_path).unwrap(), "user content");
}

#[test]
fn opening_missing_file_reports_failure() {
    let (_dir, provider, mut store) = setup();

    // A listing entry whose file vanished between listing and open.
    let current_dir = store.state().workspace.current_dir().to_path_buf();
    pump(
        &mut store,
        &provider,
        Action::DirLoaded {
            path: current_dir,
            entries: vec![choicepad::fs::DirEntry::new(
                PathBuf::from("/nonexistent/ghost.txt"),
                false,
            )],
        },
    );
    run(&mut store, &provider, Command::ExplorerActivate);

    assert!(store.state().workspace.open_docs().is_empty());
    assert!(store.state().ui.notice.is_some());
}
