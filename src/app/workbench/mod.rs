//! Workbench: owns the store and the provider, routes input, runs effects,
//! renders the frame.

use std::path::Path;

use ratatui::Frame;

use crate::core::event::InputEvent;
use crate::fs::FileProvider;
use crate::kernel::{Action, AppState, Store};
use crate::services::config;
use crate::views::{EditorView, ExplorerView};

use super::theme::UiTheme;

mod effects;
mod input;
mod render;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const SIDEBAR_WIDTH: u16 = 30;

pub struct Workbench {
    store: Store,
    provider: Box<dyn FileProvider>,
    explorer: ExplorerView,
    editor: EditorView,
    theme: UiTheme,
    last_editor_height: usize,
}

impl Workbench {
    pub fn new(root: &Path, provider: Box<dyn FileProvider>) -> Self {
        if !cfg!(test) {
            let _ = config::ensure_settings_file();
        }
        let settings = if cfg!(test) {
            config::Settings::default()
        } else {
            config::load_settings()
        };

        // Non-fatal: a missing sample project never blocks startup.
        match crate::scaffold::ensure_sample_project(provider.as_ref(), root) {
            Ok(true) => {}
            Ok(false) => tracing::debug!("sample project already present"),
            Err(e) => tracing::warn!(error = %e, "sample project provisioning failed"),
        }

        let state = AppState::new(root.to_path_buf());
        let mut workbench = Self {
            store: Store::new(state),
            provider,
            explorer: ExplorerView::new(),
            editor: EditorView::new(settings.editor),
            theme: UiTheme::default(),
            last_editor_height: 0,
        };

        // Initial listing of the root document path.
        workbench.dispatch(Action::RunCommand(crate::core::Command::ExplorerGoRoot));
        workbench
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub(super) fn editor_view_height(&self) -> usize {
        self.last_editor_height
    }

    /// Dispatches an action and synchronously drains every effect it (or a
    /// follow-up action) produces. At most one filesystem call happens per
    /// user action in practice; the loop just keeps the plumbing uniform.
    pub fn dispatch(&mut self, action: Action) {
        let mut result = self.store.dispatch(action);
        while let Some(effect) = result.effects.pop() {
            if let Some(follow_up) = self.run_effect(effect) {
                let next = self.store.dispatch(follow_up);
                result.effects.extend(next.effects);
            }
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        input::handle(self, event);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        render::render(self, frame);
    }
}
