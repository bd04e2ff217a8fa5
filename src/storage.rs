//! Key-value storage for user preferences.
//!
//! The theme preference is the only state folio persists. Storage sits behind
//! the [`PreferenceStore`] trait so the theme controller's fallback policy can
//! be exercised against stores that fail on purpose.

use crate::config::{preferences_path, render_preferences};
use crate::error::{FolioError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A string key-value store.
pub trait PreferenceStore {
    /// Read a value. `Ok(None)` means the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Human-readable location of the store, for display.
    fn location(&self) -> String;
}

/// Preferences persisted as a TOML table in a single file.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `preferences.toml` inside a config directory.
    pub fn in_config_dir(dir: &Path) -> Self {
        Self::new(preferences_path(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_table(&self) -> Result<Option<toml::Table>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let table: toml::Table = toml::from_str(&content)?;
        Ok(Some(table))
    }

    /// Load the current table for modification.
    ///
    /// A corrupted file is replaced rather than blocking the write.
    fn load_table_for_update(&self) -> Result<toml::Table> {
        match self.load_table() {
            Ok(table) => Ok(table.unwrap_or_default()),
            Err(FolioError::TomlParse(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "replacing unparsable preferences file");
                Ok(toml::Table::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save_table(&self, table: &toml::Table) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, render_preferences(table)?)?;
        Ok(())
    }
}

impl PreferenceStore for TomlFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let Some(table) = self.load_table()? else {
            return Ok(None);
        };
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(FolioError::Config(format!(
                "'{}' in {} must be a string, found {}",
                key,
                self.path.display(),
                other.type_str()
            ))),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut table = self.load_table_for_update()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        self.save_table(&table)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut table = self.load_table_for_update()?;
        table.remove(key);
        self.save_table(&table)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Preferences held in memory only. Used by `--ephemeral` and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }

    fn location(&self) -> String {
        "(in memory, not persisted)".to_string()
    }
}
