use crate::Result;
use std::{fs, path::PathBuf};
use tracing::info;

/// Where finished exports go. The text is delivered as is, line endings included.
pub trait Sink {
    fn deliver(&self, text: &str, file_name: &str) -> Result<()>;
}

pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> FileSink {
        FileSink { dir: dir.into() }
    }

    /// Where a file named `file_name` ends up, always directly inside the sink directory.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(safe_file_name(file_name))
    }
}

/// Area names may contain path separators, those must not turn into directories.
fn safe_file_name(file_name: &str) -> String {
    file_name.replace(['/', '\\', '\0'], "_")
}

impl Sink for FileSink {
    fn deliver(&self, text: &str, file_name: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(file_name);
        fs::write(&path, text.as_bytes())?;
        info!(path = %path.display(), bytes = text.len(), "Saved export");
        Ok(())
    }
}
