use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Changes the process working directory for as long as the guard lives.
///
/// The working directory is process-wide state: tests that use this guard must not run
/// concurrently with other tests that depend on the current directory.
#[derive(Debug)]
pub struct TempChdir {
    previous: PathBuf,
}

impl TempChdir {
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(path)?;
        Ok(Self { previous })
    }

    /// Directory restored on drop.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for TempChdir {
    fn drop(&mut self) {
        // best effort, the previous directory may have been removed meanwhile
        let _ = env::set_current_dir(&self.previous);
    }
}
