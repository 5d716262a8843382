use std::slice::Iter;

use derive_more::{Deref, Display, Into};
use setwise_domain::{Property, ReadError, SetCounting, UpdateError};

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, ReadError>;
    async fn set_settings(&self, settings: Settings) -> Result<(), UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    /// Returns the default settings if none have been stored yet.
    async fn read_settings(&self) -> Result<Settings, ReadError>;
    async fn write_settings(&self, settings: Settings) -> Result<(), UpdateError>;
}

/// Options of the stress analysis.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Count sets as felt, i.e. scaled by the stimulus to fatigue ratio of the exercise.
    pub use_felt_sets: bool,
    /// Number of repetitions of the cycle shown in the timeline.
    pub cycles: CycleCount,
    /// Sum the selected muscles into a single series.
    pub cumulative: bool,
    /// Show only muscles receiving new stimulus on the selected day.
    pub stimulus_only: bool,
    pub view: TimelineView,
}

impl Settings {
    #[must_use]
    pub fn set_counting(&self) -> SetCounting {
        if self.use_felt_sets {
            SetCounting::Felt
        } else {
            SetCounting::Actual
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_felt_sets: true,
            cycles: CycleCount::default(),
            cumulative: false,
            stimulus_only: true,
            view: TimelineView::Stress,
        }
    }
}

#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Display,
    Deref,
    Into,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct CycleCount(u8);

impl CycleCount {
    pub const MAX: u8 = 12;

    pub fn new(value: u8) -> Result<Self, CycleCountError> {
        if !(1..=Self::MAX).contains(&value) {
            return Err(CycleCountError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl Default for CycleCount {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for CycleCount {
    type Error = CycleCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CycleCount::new(value)
    }
}

impl TryFrom<&str> for CycleCount {
    type Error = CycleCountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u8>() {
            Ok(parsed_value) => CycleCount::new(parsed_value),
            Err(_) => Err(CycleCountError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CycleCountError {
    #[error("Number of cycles must be in the range 1 to 12")]
    OutOfRange,
    #[error("Number of cycles must be an integer")]
    ParseError,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineView {
    #[default]
    Stress,
    Frequency,
}

impl Property for TimelineView {
    fn iter() -> Iter<'static, TimelineView> {
        static VIEWS: [TimelineView; 2] = [TimelineView::Stress, TimelineView::Frequency];
        VIEWS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TimelineView::Stress => "Stress",
            TimelineView::Frequency => "Frequency",
        }
    }
}
