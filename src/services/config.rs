//! Configuration service: editor settings persisted as JSON.
//!
//! Settings live in `~/.config/choicepad/settings.json` (or a temp-dir
//! fallback when no home directory is available). Missing or malformed files
//! fall back to defaults; the app never fails to start over configuration.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    pub tab_size: u8,
    pub show_line_numbers: bool,
    /// Lines moved per PageUp/PageDown beyond the visible height.
    pub scroll_lines: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            show_line_numbers: true,
            scroll_lines: 1,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub editor: EditorConfig,
}

fn app_dir(subdir: &str) -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".config").join("choicepad").join(subdir),
        None => std::env::temp_dir().join("choicepad").join(subdir),
    }
}

pub fn config_dir() -> PathBuf {
    app_dir("")
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = app_dir("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Writes a default settings file if none exists yet. Returns its path.
pub fn ensure_settings_file() -> io::Result<PathBuf> {
    let path = settings_path();
    if path.exists() {
        return Ok(path);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let default = serde_json::to_string_pretty(&Settings::default())
        .map_err(io::Error::other)?;
    std::fs::write(&path, default)?;
    Ok(path)
}

/// Loads settings from disk, falling back to defaults on any failure.
pub fn load_settings() -> Settings {
    let path = settings_path();
    match std::fs::read_to_string(&path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed settings, using defaults");
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}
