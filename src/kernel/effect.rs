use std::path::PathBuf;

/// Filesystem work requested by the reducer. The workbench executes each
/// effect against its provider and feeds the outcome back as an `Action`;
/// the kernel itself never touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadDir(PathBuf),
    LoadFile { path: PathBuf, name: String },
    WriteFile { path: PathBuf, content: String },
}
