use std::collections::VecDeque;

use log::warn;
use serde::{Serialize, de::DeserializeOwned};
use setwise_domain as domain;
use setwise_web_app::{self as web_app, log as app_log};

use crate::{
    KeyValueStore, Store, StoreError,
    dto::{Exercise, SavedRoutine, Weeks},
};

/// Persists the app data as JSON values in a [`KeyValueStore`].
pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Removes exercises, routines, plan and routine selection. Settings and log are kept.
    pub fn clear_app_data(&self) -> Result<(), domain::StorageError> {
        for key in Store::APP_DATA {
            self.store.delete(key)?;
        }
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: Store) -> Result<Option<T>, domain::ReadError> {
        Ok(self.store.get(key).map_err(domain::StorageError::from)?)
    }

    fn write<T: Serialize + ?Sized>(&self, key: Store, value: &T) -> Result<(), domain::UpdateError> {
        Ok(self
            .store
            .set(key, value)
            .map_err(domain::StorageError::from)?)
    }
}

impl<S: KeyValueStore> domain::ExerciseRepository for Repository<S> {
    async fn read_exercises(&self) -> Result<Option<Vec<domain::ExerciseDefinition>>, domain::ReadError> {
        let Some(exercises) = self.read::<Vec<Exercise>>(Store::Exercises)? else {
            return Ok(None);
        };
        Ok(Some(
            exercises
                .into_iter()
                .map(domain::ExerciseDefinition::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| domain::ReadError::Other(Box::new(err)))?,
        ))
    }

    async fn write_exercises(
        &self,
        exercises: &[domain::ExerciseDefinition],
    ) -> Result<(), domain::UpdateError> {
        self.write(
            Store::Exercises,
            &exercises.iter().map(Exercise::from).collect::<Vec<_>>(),
        )
    }
}

impl<S: KeyValueStore> domain::PlanRepository for Repository<S> {
    async fn read_plan(&self) -> Result<Option<domain::Plan>, domain::ReadError> {
        self.read::<Weeks>(Store::Cycles)?
            .map(domain::Plan::try_from)
            .transpose()
            .map_err(|err| domain::ReadError::Other(Box::new(err)))
    }

    async fn write_plan(&self, plan: &domain::Plan) -> Result<(), domain::UpdateError> {
        self.write(Store::Cycles, &Weeks::from(plan))
    }
}

impl<S: KeyValueStore> domain::RoutineRepository for Repository<S> {
    async fn read_routines(&self) -> Result<Vec<domain::Routine>, domain::ReadError> {
        self.read::<Vec<SavedRoutine>>(Store::Routines)?
            .unwrap_or_default()
            .into_iter()
            .map(domain::Routine::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| domain::ReadError::Other(Box::new(err)))
    }

    async fn write_routines(&self, routines: &[domain::Routine]) -> Result<(), domain::UpdateError> {
        self.write(
            Store::Routines,
            &routines.iter().map(SavedRoutine::from).collect::<Vec<_>>(),
        )
    }

    async fn read_selected_routine(&self) -> Result<Option<domain::Name>, domain::ReadError> {
        let Some(name) = self.read::<String>(Store::SelectedRoutine)? else {
            return Ok(None);
        };
        if name.is_empty() {
            return Ok(None);
        }
        match domain::Name::new(&name) {
            Ok(name) => Ok(Some(name)),
            Err(err) => {
                warn!("ignoring invalid selected routine {name:?}: {err}");
                Ok(None)
            }
        }
    }

    async fn write_selected_routine(
        &self,
        name: Option<&domain::Name>,
    ) -> Result<(), domain::UpdateError> {
        self.write(
            Store::SelectedRoutine,
            name.map_or("", |name| name.as_ref().as_str()),
        )
    }
}

impl<S: KeyValueStore> web_app::SettingsRepository for Repository<S> {
    async fn read_settings(&self) -> Result<web_app::Settings, domain::ReadError> {
        Ok(self.read(Store::Settings)?.unwrap_or_default())
    }

    async fn write_settings(&self, settings: web_app::Settings) -> Result<(), domain::UpdateError> {
        self.write(Store::Settings, &settings)
    }
}

impl<S: KeyValueStore + Send + Sync + 'static> app_log::Repository for Repository<S> {
    fn read_entries(&self) -> Result<VecDeque<app_log::Entry>, app_log::Error> {
        Ok(self
            .store
            .get(Store::Log)
            .map_err(log_error)?
            .unwrap_or_default())
    }

    fn write_entry(&self, entry: app_log::Entry) -> Result<(), app_log::Error> {
        let mut entries = self.read_entries()?;
        app_log::append(&mut entries, entry);
        self.store.set(Store::Log, &entries).map_err(log_error)
    }
}

fn log_error(err: StoreError) -> app_log::Error {
    app_log::Error::Unknown(err.to_string())
}
