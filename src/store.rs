//! Key-value storage for user settings and inbox read state.
//!
//! Components never touch the filesystem directly; they receive a
//! [`KeyValueStore`] and go through [`load`](KeyValueStore::load) and
//! [`save`](KeyValueStore::save). [`FileStore`] keeps everything in a single
//! JSON object on disk, [`MemoryStore`] keeps it in memory for tests and
//! ephemeral sessions.

use crate::config;
use crate::error::{DashError, Result};
use crate::models::{ReadState, Settings};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub trait KeyValueStore {
    /// Load every stored entry.
    fn load(&self) -> Result<BTreeMap<String, Value>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove `key`. Returns `true` if it was present.
    fn remove(&mut self, key: &str) -> Result<bool>;

    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.load()?.remove(key))
    }

    /// Short name used in logs and `Display` output.
    fn kind(&self) -> &'static str;
}

/// Deserialize the value under `key`, or return `T::default()` if absent.
pub fn load_typed<T>(store: &dyn KeyValueStore, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match store.get(key)? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(T::default()),
    }
}

pub fn save_typed<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    store.save(key, serde_json::to_value(value)?)
}

impl Settings {
    pub fn load_from(store: &dyn KeyValueStore) -> Result<Settings> {
        load_typed(store, config::SETTINGS_KEY)
    }

    pub fn save_to(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        save_typed(store, config::SETTINGS_KEY, self)
    }
}

impl ReadState {
    pub fn load_from(store: &dyn KeyValueStore) -> Result<ReadState> {
        load_typed(store, config::READ_STATE_KEY)
    }

    pub fn save_to(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        save_typed(store, config::READ_STATE_KEY, self)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self) -> Result<BTreeMap<String, Value>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// JSON-file backed store.
///
/// The whole map is read on every `load` and rewritten on every `save`.
/// Writes go to a temp file that is then renamed over the original, so an
/// interrupted write never leaves a truncated file behind.
pub struct FileStore {
    /// Directory holding the store file.
    pub dir: PathBuf,
    path: PathBuf,
}

impl FileStore {
    /// Open (or create) a store in `dir`.
    ///
    /// If `dir` is `None`, uses the platform config directory (e.g.
    /// `~/.config/folio-dash` on Linux). The directory is created if missing;
    /// the file itself is created on first save.
    pub fn open(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(config::default_store_dir);
        fs::create_dir_all(&dir)?;
        let path = dir.join(config::STORE_FILE);
        tracing::info!(path = %path.display(), "opened settings store");
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the map from disk.
    ///
    /// A file that fails to parse is removed and treated as empty, so one
    /// bad write can't lock the user out of their settings permanently.
    fn read_map(&self) -> Result<BTreeMap<String, Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read(&self.path)?;
        match serde_json::from_slice::<BTreeMap<String, Value>>(&contents) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "corrupt settings store -- removing"
                );
                let _ = fs::remove_file(&self.path);
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, Value>) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let result = (|| -> Result<()> {
            let contents = serde_json::to_string_pretty(map)?;
            fs::write(&tmp, contents)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }

        result
    }

    /// Delete the store file, keeping the directory.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DashError::Io(e)),
        }
    }
}

impl KeyValueStore for FileStore {
    fn load(&self) -> Result<BTreeMap<String, Value>> {
        self.read_map()
    }

    fn save(&mut self, key: &str, value: Value) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);
        self.write_map(&map)?;
        tracing::debug!(key, "saved store entry");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let mut map = self.read_map()?;
        let removed = map.remove(key).is_some();
        if removed {
            self.write_map(&map)?;
        }
        Ok(removed)
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}
