use std::collections::VecDeque;

use log::{debug, error};
use setwise_domain::{ReadError, StorageError, UpdateError};

use crate::{Settings, SettingsRepository, SettingsService, log as app_log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: app_log::Repository> app_log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<app_log::Entry>, app_log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: app_log::Entry) -> Result<(), app_log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, ReadError> {
        let result = self.repository.read_settings().await;
        if let Err(ref err) = result {
            if matches!(err, ReadError::Storage(StorageError::NoConnection)) {
                debug!("failed to read settings: {err}");
            } else {
                error!("failed to read settings: {err}");
            }
        }
        result
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), UpdateError> {
        let result = self.repository.write_settings(settings).await;
        if let Err(ref err) = result {
            error!("failed to write settings: {err}");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CycleCount, TimelineView, log::Service as _};

    #[derive(Default)]
    struct FakeRepository {
        settings: Mutex<Option<Settings>>,
        entries: Mutex<VecDeque<app_log::Entry>>,
    }

    impl SettingsRepository for FakeRepository {
        async fn read_settings(&self) -> Result<Settings, ReadError> {
            Ok(self.settings.lock().unwrap().unwrap_or_default())
        }

        async fn write_settings(&self, settings: Settings) -> Result<(), UpdateError> {
            *self.settings.lock().unwrap() = Some(settings);
            Ok(())
        }
    }

    impl app_log::Repository for FakeRepository {
        fn read_entries(&self) -> Result<VecDeque<app_log::Entry>, app_log::Error> {
            Ok(self.entries.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: app_log::Entry) -> Result<(), app_log::Error> {
            app_log::append(&mut self.entries.lock().unwrap(), entry);
            Ok(())
        }
    }

    #[test]
    fn test_settings() {
        let service = Service::new(FakeRepository::default());
        let settings = Settings {
            cycles: CycleCount::new(3).unwrap(),
            view: TimelineView::Frequency,
            ..Settings::default()
        };

        assert_eq!(block_on(service.get_settings()).unwrap(), Settings::default());

        block_on(service.set_settings(settings)).unwrap();

        assert_eq!(block_on(service.get_settings()).unwrap(), settings);
    }

    #[test]
    fn test_log_entries() {
        let service = Service::new(FakeRepository::default());
        let entry = app_log::Entry {
            time: "Oct 18 10:00:00".to_string(),
            level: ::log::Level::Info,
            message: "plan saved".to_string(),
        };

        service.add_log_entry(entry.clone()).unwrap();

        assert_eq!(service.get_log_entries().unwrap(), VecDeque::from([entry]));
    }
}
