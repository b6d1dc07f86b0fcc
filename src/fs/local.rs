//! Local-disk provider backed by std::fs.

use std::fs;
use std::path::Path;

use super::provider::{sort_listing, DirEntry, FileProvider, FsError, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileProvider for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        if !path.exists() {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(FsError::NotADirectory(path.to_path_buf()));
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(DirEntry::new(entry.path(), is_dir));
        }
        sort_listing(&mut entries);
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        if path.is_dir() {
            return Err(FsError::NotAFile(path.to_path_buf()));
        }
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FsError::NotFound(path.to_path_buf())
            } else {
                FsError::Io(e)
            }
        })?;
        String::from_utf8(bytes).map_err(|_| FsError::InvalidUtf8(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_dir_sorted() {
        let tmp = TempDir::new().unwrap();
        let fs_impl = LocalFs::new();

        fs_impl
            .write_file(&tmp.path().join("b.txt"), "b")
            .unwrap();
        fs_impl
            .write_file(&tmp.path().join("a.txt"), "a")
            .unwrap();
        fs_impl.create_dir_all(&tmp.path().join("sub")).unwrap();

        let entries = fs_impl.read_dir(tmp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["sub", "a.txt", "b.txt"]);
        assert!(entries[0].is_dir);
    }

    #[test]
    fn test_read_dir_missing() {
        let tmp = TempDir::new().unwrap();
        let fs_impl = LocalFs::new();
        let err = fs_impl.read_dir(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn test_read_write_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let fs_impl = LocalFs::new();
        let path = tmp.path().join("story.txt");

        fs_impl.write_file(&path, "*title Test").unwrap();
        assert!(fs_impl.exists(&path));
        assert_eq!(fs_impl.read_file(&path).unwrap(), "*title Test");
    }

    #[test]
    fn test_read_file_on_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let fs_impl = LocalFs::new();
        let err = fs_impl.read_file(tmp.path()).unwrap_err();
        assert!(matches!(err, FsError::NotAFile(_)));
    }
}
