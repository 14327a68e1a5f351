/// Filesystem helpers that never touch existing content.
pub mod fs {
    use std::fs::{self, OpenOptions};
    use std::io;
    use std::path::Path;

    /// Ensure a directory exists, creating it recursively if needed.
    ///
    /// Returns `true` when the directory was created by this call.
    pub fn ensure_dir(path: &Path) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        fs::create_dir_all(path)?;
        Ok(true)
    }

    /// Ensure a file exists, creating it empty if needed.
    ///
    /// Existing files are never opened for writing. Returns `true` when the
    /// file was created by this call.
    pub fn ensure_empty_file(path: &Path) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err),
        }
    }

}
