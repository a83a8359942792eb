use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StorageError;

pub const PLANS_KEY: &str = "mealmate_meal_plans";
pub const NUTRITION_GOALS_KEY: &str = "mealmate_nutrition_goals";
pub const NUTRITION_LOGS_KEY: &str = "mealmate_nutrition_logs";
pub const PREFERENCES_KEY: &str = "mealmate_preferences";
pub const HISTORY_KEY: &str = "mealmate_meal_history";
pub const PANTRY_KEY: &str = "mealmate_available_ingredients";

/// Opaque load/save of JSON documents by key.
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError>;

    fn save(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

/// Load and decode a typed document. Missing keys decode to `None`.
pub fn load_as<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.load(key)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

pub fn save_as<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    store.save(key, serde_json::to_value(value)?)
}

/// Process-local store, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// One pretty-printed `{key}.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "Opened file store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(key);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(&value)?;
        std::fs::write(self.path_for(key), bytes)?;
        Ok(())
    }
}
