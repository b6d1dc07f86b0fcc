//! In-memory provider used as a test double for the workspace core.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::provider::{sort_listing, DirEntry, FileProvider, FsError, Result};

#[derive(Default)]
struct Inner {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    fail_writes: bool,
    fail_reads: bool,
}

#[derive(Default)]
pub struct MemoryFs {
    inner: Mutex<Inner>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let fs = Self::new();
        for (path, content) in files {
            fs.insert_file(Path::new(path), content);
        }
        fs
    }

    pub fn insert_file(&self, path: &Path, content: &str) {
        let mut inner = self.inner.lock().unwrap();
        let mut dir = path.parent();
        while let Some(d) = dir {
            inner.dirs.insert(d.to_path_buf());
            dir = d.parent();
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
    }

    pub fn insert_dir(&self, path: &Path) {
        let mut inner = self.inner.lock().unwrap();
        let mut dir = Some(path);
        while let Some(d) = dir {
            inner.dirs.insert(d.to_path_buf());
            dir = d.parent();
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.lock().unwrap().fail_writes = fail;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.lock().unwrap().fail_reads = fail;
    }

    pub fn file_content(&self, path: &Path) -> Option<String> {
        self.inner.lock().unwrap().files.get(path).cloned()
    }
}

impl FileProvider for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.files.contains_key(path) || inner.dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.insert_dir(path);
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_reads {
            return Err(FsError::Io(io::Error::other("injected read failure")));
        }
        if !inner.dirs.contains(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }

        let mut entries = Vec::new();
        for dir in &inner.dirs {
            if dir.parent() == Some(path) {
                entries.push(DirEntry::new(dir.clone(), true));
            }
        }
        for file in inner.files.keys() {
            if file.parent() == Some(path) {
                entries.push(DirEntry::new(file.clone(), false));
            }
        }
        sort_listing(&mut entries);
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_reads {
            return Err(FsError::Io(io::Error::other("injected read failure")));
        }
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_writes {
            return Err(FsError::Io(io::Error::other("injected write failure")));
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_read() {
        let fs = MemoryFs::with_files(&[("/root/startup.txt", "A")]);
        assert_eq!(fs.read_file(Path::new("/root/startup.txt")).unwrap(), "A");
        assert!(fs.exists(Path::new("/root")));
    }

    #[test]
    fn test_read_dir_lists_children_only() {
        let fs = MemoryFs::with_files(&[
            ("/root/a.txt", "a"),
            ("/root/sub/b.txt", "b"),
        ]);
        let entries = fs.read_dir(Path::new("/root")).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["sub", "a.txt"]);
    }

    #[test]
    fn test_injected_write_failure() {
        let fs = MemoryFs::new();
        fs.set_fail_writes(true);
        assert!(fs.write_file(Path::new("/x.txt"), "x").is_err());
    }

    #[test]
    fn test_injected_read_failure() {
        let fs = MemoryFs::with_files(&[("/root/a.txt", "a")]);
        fs.set_fail_reads(true);
        assert!(fs.read_file(Path::new("/root/a.txt")).is_err());
        assert!(fs.read_dir(Path::new("/root")).is_err());
    }
}
