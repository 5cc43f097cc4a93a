use crate::error::PersistenceError;

use std::fs;
use std::path::Path;

/// Durable byte storage for serialized cache images.
pub trait StorageBackend: Send + Sync {
  fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), PersistenceError>;
  fn read(&self, path: &Path) -> Result<Vec<u8>, PersistenceError>;
}

/// A backend that stores images as plain files, creating missing parent
/// directories on write.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileBackend;

impl StorageBackend for FileBackend {
  fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }
    fs::write(path, bytes)?;
    Ok(())
  }

  fn read(&self, path: &Path) -> Result<Vec<u8>, PersistenceError> {
    Ok(fs::read(path)?)
  }
}
