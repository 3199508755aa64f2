//! File storage behind the `/files` route

use std::io;
use std::path::PathBuf;

/// Reads and writes files under a root directory.
///
/// Names are joined onto the root as given. Nothing stops a name such as
/// `..` from addressing the parent of the root; see DESIGN.md.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.path_for(name)).await
    }

    /// Creates or truncates `name` and writes `contents` to it.
    /// Concurrent writers to one name are not coordinated; the last one wins.
    pub async fn write(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(self.path_for(name), contents).await
    }
}
