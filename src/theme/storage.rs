//! Durable key/value storage for user preferences.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{write_atomic, Config};

/// A string key/value store that survives restarts.
pub trait PreferenceStore: Send {
    /// Reads a value; `Ok(None)` when the key is unset.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes a key. Removing an unset key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Preferences kept in a flat TOML table on disk.
///
/// Every write rewrites the whole file through a temp file + rename.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `preferences.toml` in the config directory.
    pub fn in_config_dir() -> Result<Self> {
        Ok(Self::new(Config::config_dir()?.join("preferences.toml")))
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read preferences file: {}",
            self.path.display()
        ))?;

        toml::from_str(&content).context(format!(
            "Failed to parse preferences file: {}",
            self.path.display()
        ))
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create preferences directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string(values).context("Failed to serialize preferences")?;
        write_atomic(&self.path, &content)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// Preferences held in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("prefs").join("preferences.toml"));

        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        store.set("other", "value").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        // a second handle sees the same file
        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));

        store.remove("theme").unwrap();
        assert_eq!(reopened.get("theme").unwrap(), None);
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_writes_plain_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.toml");
        let mut store = FileStore::new(&path);
        store.set("theme", "light").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "theme = \"light\"");
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_file_store_remove_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.toml");
        let mut store = FileStore::new(&path);
        store.remove("theme").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_reports_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.toml");
        fs::write(&path, "theme = [").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("theme").is_err());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::with("theme", "dark");
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }
}
