//! Workspace document model: directory listing, open documents, active buffer.
//!
//! Pure state transitions only. Filesystem access happens outside the kernel;
//! the results land here via the store as plain data.

use std::path::{Path, PathBuf};

use crate::fs::DirEntry;

/// Extensions the editor will open. Everything else is treated as opaque
/// binary and refused with a user-visible notice.
pub const TEXT_EXTENSIONS: &[&str] = &["txt"];

pub fn is_text_file(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    TEXT_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// A file currently loaded for editing. `content` is written through on every
/// edit of the active document; `modified` tracks divergence from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
    pub modified: bool,
}

/// The single in-memory workspace: current listing, open documents in
/// insertion order, the active document and its live buffer.
///
/// Invariants:
/// - at most one `OpenDocument` per path
/// - `active_path`, if set, references an entry of `open_docs`
/// - `active_buffer` mirrors the active document's `content` and is the
///   source of truth until an explicit save
#[derive(Debug, Default)]
pub struct WorkspaceState {
    current_dir: PathBuf,
    entries: Vec<DirEntry>,
    open_docs: Vec<OpenDocument>,
    active_path: Option<PathBuf>,
    active_buffer: String,
}

impl WorkspaceState {
    pub fn new(current_dir: PathBuf) -> Self {
        Self {
            current_dir,
            ..Self::default()
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&DirEntry> {
        self.entries.get(index)
    }

    pub fn open_docs(&self) -> &[OpenDocument] {
        &self.open_docs
    }

    pub fn active_path(&self) -> Option<&Path> {
        self.active_path.as_deref()
    }

    pub fn active_buffer(&self) -> &str {
        &self.active_buffer
    }

    pub fn is_open(&self, path: &Path) -> bool {
        self.open_docs.iter().any(|d| d.path == path)
    }

    pub fn active_document(&self) -> Option<&OpenDocument> {
        self.active_path
            .as_deref()
            .and_then(|path| self.open_docs.iter().find(|d| d.path == path))
    }

    /// Replaces the listing with a fresh one. The previous listing is only
    /// discarded here; a failed load never reaches this method.
    pub fn set_listing(&mut self, path: PathBuf, entries: Vec<DirEntry>) -> bool {
        self.current_dir = path;
        self.entries = entries;
        true
    }

    /// Appends a freshly loaded document and makes it active. Idempotent: if
    /// a document for `path` is already open it is reused as-is (no duplicate,
    /// no content reload) and merely activated.
    pub fn insert_document(&mut self, path: PathBuf, name: String, content: String) -> bool {
        if self.is_open(&path) {
            return self.switch_active(&path);
        }

        self.open_docs.push(OpenDocument {
            name,
            path: path.clone(),
            content: content.clone(),
            modified: false,
        });
        self.active_path = Some(path);
        self.active_buffer = content;
        true
    }

    /// Full-replace edit of the live buffer, written through to the active
    /// document. No debouncing, no diffing.
    pub fn edit_active(&mut self, text: String) -> bool {
        if self.active_buffer == text
            && self.active_document().map_or(true, |d| d.content == text)
        {
            return false;
        }

        self.active_buffer = text.clone();
        if let Some(path) = self.active_path.clone() {
            if let Some(doc) = self.open_docs.iter_mut().find(|d| d.path == path) {
                doc.content = text;
                doc.modified = true;
            }
        }
        true
    }

    /// Marks a document clean after a successful write. Content stays as-is;
    /// a failed save leaves `modified` untouched.
    pub fn mark_saved(&mut self, path: &Path) -> bool {
        if let Some(doc) = self.open_docs.iter_mut().find(|d| d.path == path) {
            let changed = doc.modified;
            doc.modified = false;
            changed
        } else {
            false
        }
    }

    /// Removes the document. If it was active, the first remaining document in
    /// insertion order becomes active and the buffer resyncs from its content,
    /// or clears if none remain.
    pub fn close_document(&mut self, path: &Path) -> bool {
        let Some(index) = self.open_docs.iter().position(|d| d.path == path) else {
            return false;
        };
        self.open_docs.remove(index);

        if self.active_path.as_deref() == Some(path) {
            if let Some(first) = self.open_docs.first() {
                self.active_path = Some(first.path.clone());
                self.active_buffer = first.content.clone();
            } else {
                self.active_path = None;
                self.active_buffer.clear();
            }
        }
        true
    }

    /// Activates an already-open document and resyncs the buffer from its
    /// content. Unsaved edits to the previous document survive in its
    /// `content` field, since edits are written through on every keystroke.
    pub fn switch_active(&mut self, path: &Path) -> bool {
        let Some(doc) = self.open_docs.iter().find(|d| d.path == path) else {
            return false;
        };
        let changed = self.active_path.as_deref() != Some(path);
        self.active_path = Some(doc.path.clone());
        self.active_buffer = doc.content.clone();
        changed
    }

    /// Cycles the active tab by `delta` in insertion order.
    pub fn cycle_active(&mut self, delta: isize) -> bool {
        if self.open_docs.len() < 2 {
            return false;
        }
        let current = self
            .active_path
            .as_deref()
            .and_then(|p| self.open_docs.iter().position(|d| d.path == p))
            .unwrap_or(0);
        let len = self.open_docs.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        let path = self.open_docs[next].path.clone();
        self.switch_active(&path)
    }
}
