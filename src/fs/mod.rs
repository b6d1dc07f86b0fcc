//! Filesystem provider module
//!
//! Abstracts filesystem access behind a trait so the workspace core can run
//! against the real disk or an in-memory double in tests.

pub mod local;
pub mod memory;
pub mod provider;

pub use local::LocalFs;
pub use memory::MemoryFs;
pub use provider::{DirEntry, FileProvider, FsError};
