use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{LauncherError, Result};

/// Where the running launcher is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallationLocator {
    /// Directory holding the running executable.
    CurrentExecutable,
    /// A known directory, e.g. passed on the command line.
    Fixed(PathBuf),
}

impl InstallationLocator {
    /// Detects the installation directory and checks that it can be updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined, does not exist,
    /// is not a directory, or is not writable.
    pub fn detect_and_check(&self) -> Result<PathBuf> {
        let directory = self.detect()?;
        ensure_writable_dir(&directory)?;
        debug!("Launcher installation directory: {}", directory.display());
        Ok(directory)
    }

    fn detect(&self) -> Result<PathBuf> {
        match self {
            Self::Fixed(path) => Ok(path.clone()),
            Self::CurrentExecutable => {
                let exe = std::env::current_exe()
                    .and_then(|exe| exe.canonicalize())
                    .map_err(|e| LauncherError::InstallationUndetected(e.to_string()))?;
                exe.parent().map(Path::to_path_buf).ok_or_else(|| {
                    LauncherError::InstallationUndetected(format!(
                        "executable {} has no parent directory",
                        exe.display()
                    ))
                })
            }
        }
    }
}

/// Fails unless `dir` is an existing directory a file can be created in.
fn ensure_writable_dir(dir: &Path) -> Result<()> {
    let unusable = |reason: String| LauncherError::InstallationDirectory {
        path: dir.to_path_buf(),
        reason,
    };

    let metadata = std::fs::metadata(dir).map_err(|e| unusable(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(unusable("not a directory".to_string()));
    }

    // Permission bits do not tell the whole story (ACLs, read-only mounts).
    tempfile::Builder::new()
        .prefix(".buildscout-probe")
        .tempfile_in(dir)
        .map_err(|e| unusable(format!("not writable: {e}")))?;

    Ok(())
}
