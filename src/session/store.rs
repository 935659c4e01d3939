//! Persisted key-value store for the form and the premium flag.
//!
//! The store is a flat string-to-string map. [`FileStore`] keeps it in a JSON
//! file under the platform data directory:
//! - Linux: `~/.local/share/shieldpage/store.json`
//! - macOS: `~/Library/Application Support/shieldpage/store.json`
//! - Windows: `C:\Users\<User>\AppData\Roaming\shieldpage\store.json`

use crate::config::ConfigRecord;
use crate::constants::store::{APP_DIR, FORM_KEY, PREMIUM_KEY, PREMIUM_VALUE, STORE_FILE};
use crate::error::{Error, Result};
use crate::ioutils::write_file;
use indexmap::IndexMap;
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store, used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.shift_remove(key);
        Ok(())
    }
}

/// JSON file backed store. Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: IndexMap<String, String>,
}

impl FileStore {
    /// Opens the store at the default location.
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::Other(anyhow::anyhow!("Could not determine data directory")))?;
        Self::open(data_dir.join(APP_DIR).join(STORE_FILE))
    }

    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable one is logged and treated as empty.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring corrupt store '{}': {e}", path.display());
                IndexMap::new()
            })
        } else {
            IndexMap::new()
        };
        debug!("Opened store at {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        write_file(&content, &self.path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.shift_remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// Loads the saved form. A missing or corrupt entry yields `None`.
pub fn load_form(store: &impl KeyValueStore) -> Option<ConfigRecord> {
    let saved = store.get(FORM_KEY)?;
    match serde_json::from_str(saved) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Discarding saved form: {e}");
            None
        }
    }
}

pub fn save_form(store: &mut impl KeyValueStore, config: &ConfigRecord) -> Result<()> {
    store.set(FORM_KEY, serde_json::to_string(config)?)
}

pub fn is_premium(store: &impl KeyValueStore) -> bool {
    store.get(PREMIUM_KEY) == Some(PREMIUM_VALUE)
}

pub fn set_premium(store: &mut impl KeyValueStore) -> Result<()> {
    store.set(PREMIUM_KEY, PREMIUM_VALUE.to_string())
}
