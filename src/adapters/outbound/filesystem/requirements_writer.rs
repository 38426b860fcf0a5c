use crate::ports::outbound::ManifestWriter;
use crate::shared::error::DepsnapError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// RequirementsFileWriter adapter for persisting the pinned manifest
///
/// Creates the destination directory when missing and refuses to clobber
/// an existing file unless overwriting was requested. The existence check
/// happens immediately before the write; a concurrent filesystem change in
/// that window is an accepted benign race.
pub struct RequirementsFileWriter {
    destination: PathBuf,
    file_name: String,
    overwrite: bool,
}

impl RequirementsFileWriter {
    /// # Arguments
    /// * `destination` - Directory the manifest is written into
    /// * `file_name` - Manifest file name within the destination
    /// * `overwrite` - Whether an existing manifest may be replaced
    pub fn new(destination: PathBuf, file_name: impl Into<String>, overwrite: bool) -> Self {
        Self {
            destination,
            file_name: file_name.into(),
            overwrite,
        }
    }

    pub fn target_path(&self) -> PathBuf {
        self.destination.join(&self.file_name)
    }

    fn ensure_destination(&self) -> Result<()> {
        if !self.destination.exists() {
            fs::create_dir_all(&self.destination).map_err(|e| DepsnapError::FileWriteError {
                path: self.destination.clone(),
                details: format!("Failed to create destination directory: {}", e),
            })?;
        }
        Ok(())
    }

    fn guard_existing(&self, target: &Path) -> Result<()> {
        if target.exists() && !self.overwrite {
            return Err(DepsnapError::RequirementsFileExists {
                path: target.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}

impl ManifestWriter for RequirementsFileWriter {
    fn write(&self, content: &str) -> Result<()> {
        self.ensure_destination()?;

        let target = self.target_path();
        self.guard_existing(&target)?;

        fs::write(&target, content).map_err(|e| DepsnapError::FileWriteError {
            path: target.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}
