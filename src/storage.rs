//! The storage module keeps a registry of named temporary files.
//!
//! Files live in the system temp directory, or in a chosen directory so they can be
//! persisted into place with a rename once they are complete.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use tempfile::{Builder, NamedTempFile};
use tokio::fs::{File, OpenOptions};

use crate::error::{Result, SiteMapError};

/// A registered temporary file.
#[derive(Debug)]
pub struct TemporaryFileInfo {
    pub name: String,
    file: NamedTempFile,
}

impl TemporaryFileInfo {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Registry of temporary files addressed by name.
#[derive(Debug, Default)]
pub struct TemporaryFileManager {
    directory: Option<PathBuf>,
    files: Vec<TemporaryFileInfo>,
}

impl TemporaryFileManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates temporary files inside `directory` instead of the system temp directory.
    pub fn new_in(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
            files: Vec::new(),
        }
    }

    pub fn files(&self) -> &[TemporaryFileInfo] {
        &self.files
    }

    /// Creates an empty temporary file registered as `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * `name` is already registered
    /// * The file cannot be created
    pub fn new_temp_file(&mut self, name: &str) -> Result<&TemporaryFileInfo> {
        if self.files.iter().any(|info| info.name == name) {
            return Err(SiteMapError::DuplicateResourceName(name.to_owned()));
        }

        let mut builder = Builder::new();
        builder.prefix(".sitemapgen-");
        let file = match &self.directory {
            Some(directory) => builder.tempfile_in(directory)?,
            None => builder.tempfile()?,
        };
        debug!("Created temporary file {name} at {}", file.path().display());

        self.files.push(TemporaryFileInfo {
            name: name.to_owned(),
            file,
        });
        self.file(name)
    }

    /// # Errors
    ///
    /// Returns [`SiteMapError::ResourceNotFound`] if `name` is not registered.
    pub fn file(&self, name: &str) -> Result<&TemporaryFileInfo> {
        self.files
            .iter()
            .find(|info| info.name == name)
            .ok_or_else(|| SiteMapError::ResourceNotFound(name.to_owned()))
    }

    /// Opens the file registered as `name` for writing, truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not registered or the file cannot be opened.
    pub async fn create_write_stream_for_name(&self, name: &str) -> Result<File> {
        let path = self.file(name)?.path().to_path_buf();
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(path)
            .await?;
        Ok(file)
    }

    /// Opens the file registered as `name` for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not registered or the file cannot be opened.
    pub async fn create_read_stream_for_name(&self, name: &str) -> Result<File> {
        let path = self.file(name)?.path().to_path_buf();
        Ok(File::open(path).await?)
    }

    /// Removes the file registered as `name` from disk and from the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not registered or the file cannot be removed.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let info = self.take(name)?;
        info.file.close()?;
        Ok(())
    }

    /// Moves the file registered as `name` to `destination` and forgets it.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not registered or the file cannot be moved.
    pub fn persist(&mut self, name: &str, destination: &Path) -> Result<PathBuf> {
        let info = self.take(name)?;
        info.file
            .persist(destination)
            .map_err(|error| SiteMapError::Io(error.error))?;
        debug!("Persisted {name} to {}", destination.display());
        Ok(destination.to_path_buf())
    }

    /// Removes every registered file. Failures are logged and skipped.
    pub fn cleanup(&mut self) {
        for info in self.files.drain(..) {
            let name = info.name;
            if let Err(error) = info.file.close() {
                warn!("Unable to remove temporary file {name}: {error}");
            }
        }
    }

    fn take(&mut self, name: &str) -> Result<TemporaryFileInfo> {
        let position = self
            .files
            .iter()
            .position(|info| info.name == name)
            .ok_or_else(|| SiteMapError::ResourceNotFound(name.to_owned()))?;
        Ok(self.files.remove(position))
    }
}
