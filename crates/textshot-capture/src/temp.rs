use std::fs;
use std::path::{Path, PathBuf};

/// Scoped temp file for one capture run.
///
/// Uses a fixed name in the platform temp dir and removes the file on drop.
/// Cleanup is best-effort; failures are logged and never surfaced.
pub struct TempCapture {
    path: PathBuf,
}

impl TempCapture {
    pub fn new(file_name: &str) -> Self {
        let path = std::env::temp_dir().join(file_name);
        // a stale file from an aborted run must not pass validation
        if path.exists() {
            let _ = fs::remove_file(&path);
        }
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempCapture {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path)
            && self.path.exists()
        {
            tracing::debug!("failed to remove temp capture {:?}: {}", self.path, e);
        }
    }
}
