use gloo_storage::{Storage as GlooStorage, errors::StorageError as GlooStorageError};
use serde::{Serialize, de::DeserializeOwned};

use crate::{KeyValueStore, Store, StoreError};

/// The browser's local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get<T: DeserializeOwned>(&self, key: Store) -> Result<Option<T>, StoreError> {
        match gloo_storage::LocalStorage::get(key.as_ref()) {
            Ok(value) => Ok(Some(value)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(store_error(err)),
        }
    }

    fn set<T: Serialize + ?Sized>(&self, key: Store, value: &T) -> Result<(), StoreError> {
        gloo_storage::LocalStorage::set(key.as_ref(), value).map_err(store_error)
    }

    fn delete(&self, key: Store) -> Result<(), StoreError> {
        gloo_storage::LocalStorage::delete(key.as_ref());
        Ok(())
    }
}

fn store_error(err: GlooStorageError) -> StoreError {
    match err {
        GlooStorageError::SerdeError(err) => StoreError::Serialization(err),
        err => StoreError::Backend(anyhow::anyhow!("{err}")),
    }
}
