use std::{
    collections::BTreeMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{KeyValueStore, Store, StoreError};

/// Keeps the serialized values in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<Store, String>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets all subsequent accesses fail with [`StoreError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::Relaxed);
    }

    /// Stores a raw JSON string, e.g. data written by another version of the app.
    pub fn set_raw(&self, key: Store, value: &str) -> Result<(), StoreError> {
        self.entries()?.insert(key, value.to_string());
        Ok(())
    }

    pub fn get_raw(&self, key: Store) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(&key).cloned())
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<Store, String>>, StoreError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable);
        }
        self.entries
            .lock()
            .map_err(|err| StoreError::Backend(anyhow::anyhow!("{err}")))
    }
}

impl KeyValueStore for MemoryStore {
    fn get<T: DeserializeOwned>(&self, key: Store) -> Result<Option<T>, StoreError> {
        self.entries()?
            .get(&key)
            .map(|value| serde_json::from_str(value))
            .transpose()
            .map_err(StoreError::from)
    }

    fn set<T: Serialize + ?Sized>(&self, key: Store, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_string(value)?;
        self.entries()?.insert(key, value);
        Ok(())
    }

    fn delete(&self, key: Store) -> Result<(), StoreError> {
        self.entries()?.remove(&key);
        Ok(())
    }
}
