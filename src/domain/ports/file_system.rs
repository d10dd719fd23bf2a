//! FileSystem port - abstraction over the file I/O the orchestrator needs
//!
//! Only the operations used by the compile pipeline and the watcher are
//! modelled here. Writes are plain full-file overwrites.

use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` (tests) - in-memory map
pub trait FileSystem: Send + Sync {
    /// Replace the whole content of `path`
    fn write(&self, path: &Path, content: &str) -> std::io::Result<()>;

    /// Check if a directory exists
    fn is_dir(&self, path: &Path) -> bool;
}
