//! Filesystem provider contract.
//!
//! Every operation the application performs against storage goes through
//! `FileProvider`; all failures collapse into a single `FsError` kind.

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FsError>;

#[derive(Debug)]
pub enum FsError {
    Io(io::Error),
    NotFound(PathBuf),
    NotADirectory(PathBuf),
    NotAFile(PathBuf),
    InvalidUtf8(PathBuf),
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::Io(e) => write!(f, "IO error: {}", e),
            FsError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FsError::NotADirectory(p) => write!(f, "Not a directory: {}", p.display()),
            FsError::NotAFile(p) => write!(f, "Not a file: {}", p.display()),
            FsError::InvalidUtf8(p) => write!(f, "Not valid UTF-8 text: {}", p.display()),
        }
    }
}

impl std::error::Error for FsError {}

impl From<io::Error> for FsError {
    fn from(e: io::Error) -> Self {
        FsError::Io(e)
    }
}

/// One row of a directory listing. Produced fresh on every listing request and
/// replaced wholesale by the next one; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Self { path, name, is_dir }
    }
}

pub trait FileProvider: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Lists `path` one level deep, directories first, then files, each group
    /// sorted by name.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    fn read_file(&self, path: &Path) -> Result<String>;

    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

pub(crate) fn sort_listing(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_entry_new() {
        let entry = DirEntry::new(PathBuf::from("/test/file.txt"), false);
        assert_eq!(entry.name, "file.txt");
        assert!(!entry.is_dir);
    }

    #[test]
    fn test_fs_error_display() {
        let err = FsError::NotFound(PathBuf::from("/test"));
        assert!(err.to_string().contains("/test"));
    }

    #[test]
    fn test_sort_listing_dirs_first() {
        let mut entries = vec![
            DirEntry::new(PathBuf::from("/r/b.txt"), false),
            DirEntry::new(PathBuf::from("/r/a.txt"), false),
            DirEntry::new(PathBuf::from("/r/zdir"), true),
        ];
        sort_listing(&mut entries);
        assert_eq!(entries[0].name, "zdir");
        assert_eq!(entries[1].name, "a.txt");
        assert_eq!(entries[2].name, "b.txt");
    }
}
