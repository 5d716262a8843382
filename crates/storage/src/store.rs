use serde::{Serialize, de::DeserializeOwned};
use setwise_domain as domain;
use strum::AsRefStr;

/// Keys of the persisted collections.
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Store {
    #[strum(serialize = "workoutApp_exercises")]
    Exercises,
    #[strum(serialize = "workoutApp_savedRoutines")]
    Routines,
    #[strum(serialize = "workoutApp_cycles")]
    Cycles,
    #[strum(serialize = "workoutApp_selectedRoutine")]
    SelectedRoutine,
    #[strum(serialize = "workoutApp_settings")]
    Settings,
    #[strum(serialize = "workoutApp_log")]
    Log,
}

impl Store {
    /// Collections removed when the app data is reset.
    pub const APP_DATA: [Store; 4] = [
        Store::Exercises,
        Store::Routines,
        Store::Cycles,
        Store::SelectedRoutine,
    ];
}

/// A synchronous store of JSON values.
pub trait KeyValueStore {
    /// Returns `None` if nothing is stored under `key`.
    fn get<T: DeserializeOwned>(&self, key: Store) -> Result<Option<T>, StoreError>;
    fn set<T: Serialize + ?Sized>(&self, key: Store, value: &T) -> Result<(), StoreError>;
    fn delete(&self, key: Store) -> Result<(), StoreError>;
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl From<StoreError> for domain::StorageError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Unavailable => domain::StorageError::NoConnection,
            err => domain::StorageError::Other(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Store::Exercises, "workoutApp_exercises")]
    #[case(Store::Routines, "workoutApp_savedRoutines")]
    #[case(Store::Cycles, "workoutApp_cycles")]
    #[case(Store::SelectedRoutine, "workoutApp_selectedRoutine")]
    fn test_store_key(#[case] store: Store, #[case] expected: &str) {
        assert_eq!(store.as_ref(), expected);
    }

    #[test]
    fn test_storage_error_from_store_error() {
        assert!(matches!(
            domain::StorageError::from(StoreError::Unavailable),
            domain::StorageError::NoConnection
        ));
        assert!(matches!(
            domain::StorageError::from(StoreError::Backend(anyhow::anyhow!("quota exceeded"))),
            domain::StorageError::Other(_)
        ));
    }
}
