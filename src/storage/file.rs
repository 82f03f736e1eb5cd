use super::{KeyValueStore, StorageError};
use log::*;
use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Key-value store persisted as a flat YAML map.
///
/// The file is read on every `get` and rewritten on every mutation, so
/// several processes pointed at the same file observe each other's writes.
///
#[derive(Debug, Clone)]
pub struct FileStore {
    file_path: PathBuf,
}

impl FileStore {
    pub fn new(file_path: PathBuf) -> Self {
        FileStore { file_path }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read all entries, treating a missing or empty file as empty storage.
    ///
    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents =
            fs::read_to_string(&self.file_path).map_err(|e| StorageError::ReadFailed {
                path: self.file_path.clone(),
                source: e,
            })?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_yaml::from_str(&contents)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_yaml::to_string(entries)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(&self.file_path).map_err(|e| StorageError::WriteFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| StorageError::WriteFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| StorageError::WriteFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        debug!("Persisting '{}' to {}", key, self.file_path.display());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        debug!("Removing '{}' from {}", key, self.file_path.display());
        self.write_entries(&entries)
    }
}
