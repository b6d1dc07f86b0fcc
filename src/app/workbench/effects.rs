//! Effect execution: the only place filesystem calls happen at runtime.

use crate::kernel::{Action, Effect};

use super::Workbench;

impl Workbench {
    /// Runs one effect against the provider and returns the result action.
    pub(super) fn run_effect(&mut self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::LoadDir(path) => match self.provider.read_dir(&path) {
                Ok(entries) => Some(Action::DirLoaded { path, entries }),
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "read_dir failed");
                    Some(Action::DirLoadFailed { path })
                }
            },
            Effect::LoadFile { path, name } => match self.provider.read_file(&path) {
                Ok(content) => Some(Action::DocLoaded {
                    path,
                    name,
                    content,
                }),
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "read_file failed");
                    Some(Action::DocLoadFailed { path })
                }
            },
            Effect::WriteFile { path, content } => {
                match self.provider.write_file(&path, &content) {
                    Ok(()) => Some(Action::SaveCompleted { path }),
                    Err(e) => {
                        tracing::error!(path = %path.display(), error = %e, "write_file failed");
                        Some(Action::SaveFailed { path })
                    }
                }
            }
        }
    }
}
