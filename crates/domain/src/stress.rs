use std::slice::Iter;

use derive_more::Deref;

use crate::{MuscleGroup, Property};

/// Accumulated stress below this value is treated as fully recovered.
pub const STRESS_FLOOR: f64 = 0.01;

/// Fraction of the accumulated stress of a muscle that dissipates per day.
#[derive(Deref, Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DecayRate(f64);

impl DecayRate {
    pub fn new(value: f64) -> Result<Self, DecayRateError> {
        if !(value > 0.0 && value < 1.0) {
            return Err(DecayRateError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Fraction of the accumulated stress carried over to the next day.
    #[must_use]
    pub fn retention(self) -> f64 {
        1.0 - self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DecayRateError {
    #[error("Decay rate must be between 0.0 and 1.0 (exclusive)")]
    OutOfRange,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Recovery {
    Fast,
    Moderate,
    Slow,
}

impl Property for Recovery {
    fn iter() -> Iter<'static, Recovery> {
        static RECOVERY: [Recovery; 3] = [Recovery::Fast, Recovery::Moderate, Recovery::Slow];
        RECOVERY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Recovery::Fast => "Fast",
            Recovery::Moderate => "Moderate",
            Recovery::Slow => "Slow",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayProfile {
    pub rate: DecayRate,
    pub recovery: Recovery,
}

impl MuscleGroup {
    #[must_use]
    pub fn decay_profile(self) -> DecayProfile {
        let (rate, recovery) = match self {
            MuscleGroup::Chest | MuscleGroup::FrontDelts => (0.40, Recovery::Moderate),
            MuscleGroup::SideDelts | MuscleGroup::RearDelts => (0.60, Recovery::Fast),
            MuscleGroup::Biceps | MuscleGroup::Triceps => (0.55, Recovery::Fast),
            MuscleGroup::Forearms | MuscleGroup::Calves => (0.65, Recovery::Fast),
            MuscleGroup::Traps => (0.45, Recovery::Moderate),
            MuscleGroup::UpperBack => (0.35, Recovery::Moderate),
            MuscleGroup::Core => (0.50, Recovery::Moderate),
            MuscleGroup::LowerBack => (0.20, Recovery::Slow),
            MuscleGroup::Glutes | MuscleGroup::Quads | MuscleGroup::Hamstrings => {
                (0.25, Recovery::Slow)
            }
        };
        DecayProfile {
            rate: DecayRate(rate),
            recovery,
        }
    }
}

/// The composition of the accumulated stress of a muscle on one day.
///
/// `carried_over + new_stress == total` holds exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StressBreakdown {
    pub carried_over: f64,
    pub new_stress: f64,
    pub total: f64,
}

impl StressBreakdown {
    /// Advances the accumulated stress of the previous day by one day.
    #[must_use]
    pub fn accumulate(previous_total: f64, new_stress: f64, rate: DecayRate) -> Self {
        let carried_over = previous_total * rate.retention();
        let total = carried_over + new_stress;

        if total < STRESS_FLOOR {
            return Self::default();
        }

        Self {
            carried_over,
            new_stress,
            total,
        }
    }

    #[must_use]
    pub fn level(&self) -> StressLevel {
        StressLevel::from(self.total)
    }

    /// Whether the muscle is shown for a day, either because it is trained
    /// or because it still carries stress.
    #[must_use]
    pub fn is_visible(&self, stimulus_only: bool) -> bool {
        if stimulus_only {
            self.new_stress > 0.0
        } else {
            self.total > 0.0
        }
    }
}

/// Applies the daily decay to a sequence of new stimulus values.
#[must_use]
pub fn decay_series(new_stimulus: impl IntoIterator<Item = f64>, rate: DecayRate) -> Vec<f64> {
    let mut previous_total = 0.0;
    new_stimulus
        .into_iter()
        .map(|stimulus| {
            previous_total = StressBreakdown::accumulate(previous_total, stimulus, rate).total;
            previous_total
        })
        .collect()
}

/// Accumulated stress on `day` as the sum of all earlier stimulus, each
/// decayed by the number of days elapsed since it was applied.
///
/// Unlike [`decay_series`] no floor is applied.
#[must_use]
pub fn closed_form_stress(new_stimulus: &[f64], rate: DecayRate, day: usize) -> f64 {
    new_stimulus
        .iter()
        .take(day + 1)
        .enumerate()
        .map(|(i, stimulus)| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let elapsed = (day - i) as i32;
            stimulus * rate.retention().powi(elapsed)
        })
        .sum()
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum StressLevel {
    None,
    Low,
    Moderate,
    High,
}

impl From<f64> for StressLevel {
    fn from(value: f64) -> Self {
        if value >= 10.0 {
            StressLevel::High
        } else if value >= 5.0 {
            StressLevel::Moderate
        } else if value > 0.0 {
            StressLevel::Low
        } else {
            StressLevel::None
        }
    }
}

impl Property for StressLevel {
    fn iter() -> Iter<'static, StressLevel> {
        static LEVELS: [StressLevel; 4] = [
            StressLevel::None,
            StressLevel::Low,
            StressLevel::Moderate,
            StressLevel::High,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            StressLevel::None => "None",
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn rate(value: f64) -> DecayRate {
        DecayRate::new(value).unwrap()
    }

    #[rstest]
    #[case(0.5, Ok(0.5))]
    #[case(0.0, Err(DecayRateError::OutOfRange))]
    #[case(1.0, Err(DecayRateError::OutOfRange))]
    #[case(-0.1, Err(DecayRateError::OutOfRange))]
    fn test_decay_rate_new(#[case] value: f64, #[case] expected: Result<f64, DecayRateError>) {
        assert_eq!(DecayRate::new(value).map(|r| *r), expected);
    }

    #[test]
    fn test_decay_profiles_are_valid() {
        for muscle in MuscleGroup::iter() {
            let profile = muscle.decay_profile();
            assert_eq!(DecayRate::new(*profile.rate), Ok(profile.rate), "{muscle}");
        }
    }

    #[rstest]
    #[case(MuscleGroup::Chest, 0.40, Recovery::Moderate)]
    #[case(MuscleGroup::SideDelts, 0.60, Recovery::Fast)]
    #[case(MuscleGroup::Forearms, 0.65, Recovery::Fast)]
    #[case(MuscleGroup::LowerBack, 0.20, Recovery::Slow)]
    #[case(MuscleGroup::Quads, 0.25, Recovery::Slow)]
    #[case(MuscleGroup::UpperBack, 0.35, Recovery::Moderate)]
    fn test_decay_profile(
        #[case] muscle: MuscleGroup,
        #[case] expected_rate: f64,
        #[case] expected_recovery: Recovery,
    ) {
        let profile = muscle.decay_profile();
        assert_eq!(*profile.rate, expected_rate);
        assert_eq!(profile.recovery, expected_recovery);
    }

    #[test]
    fn test_decay_series_single_stimulus() {
        assert_eq!(
            decay_series([10.0, 0.0, 0.0, 0.0], rate(0.5)),
            vec![10.0, 5.0, 2.5, 1.25]
        );
    }

    #[test]
    fn test_decay_series_floor() {
        let series = decay_series([0.1, 0.0, 0.0, 0.0, 0.0], rate(0.5));
        assert_eq!(series, vec![0.1, 0.05, 0.025, 0.0125, 0.0]);
        assert_eq!(decay_series([0.005], rate(0.5)), vec![0.0]);
    }

    #[test]
    fn test_decay_series_strictly_decreasing_without_stimulus() {
        let series = decay_series(
            std::iter::once(12.0).chain(std::iter::repeat_n(0.0, 20)),
            rate(0.25),
        );
        for window in series.windows(2) {
            assert!(
                window[1] < window[0] || window[1] == 0.0,
                "{} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[rstest]
    #[case::single_day(&[3.0], 0.4)]
    #[case::consecutive(&[3.0, 4.5, 0.0, 6.0, 0.0, 0.0, 2.0], 0.4)]
    #[case::slow(&[10.0, 0.0, 10.0, 0.0, 10.0, 0.0, 0.0, 10.0, 0.0, 10.0], 0.2)]
    #[case::fast(&[5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0], 0.65)]
    fn test_decay_series_matches_closed_form(#[case] stimulus: &[f64], #[case] rate_value: f64) {
        let series = decay_series(stimulus.iter().copied(), rate(rate_value));
        for (day, value) in series.iter().enumerate() {
            let expected = closed_form_stress(stimulus, rate(rate_value), day);
            assert!(
                (value - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                "day {day}: {value} != {expected}"
            );
        }
    }

    #[rstest]
    #[case(0.0, 3.0, 0.4, 0.0, 3.0)]
    #[case(3.0, 0.0, 0.4, 1.8, 0.0)]
    #[case(4.2, 2.5, 0.55, 1.89, 2.5)]
    fn test_stress_breakdown_accumulate(
        #[case] previous_total: f64,
        #[case] new_stress: f64,
        #[case] rate_value: f64,
        #[case] expected_carried_over: f64,
        #[case] expected_new_stress: f64,
    ) {
        let breakdown = StressBreakdown::accumulate(previous_total, new_stress, rate(rate_value));
        assert_approx_eq!(breakdown.carried_over, expected_carried_over);
        assert_approx_eq!(breakdown.new_stress, expected_new_stress);
        assert_eq!(breakdown.carried_over + breakdown.new_stress, breakdown.total);
    }

    #[test]
    fn test_stress_breakdown_floor_zeroes_all_parts() {
        assert_eq!(
            StressBreakdown::accumulate(0.015, 0.0, rate(0.5)),
            StressBreakdown::default()
        );
    }

    #[rstest]
    #[case(StressBreakdown { carried_over: 0.0, new_stress: 3.0, total: 3.0 }, true, true)]
    #[case(StressBreakdown { carried_over: 2.0, new_stress: 0.0, total: 2.0 }, true, false)]
    #[case(StressBreakdown::default(), false, false)]
    fn test_stress_breakdown_is_visible(
        #[case] breakdown: StressBreakdown,
        #[case] expected_all: bool,
        #[case] expected_stimulus_only: bool,
    ) {
        assert_eq!(breakdown.is_visible(false), expected_all);
        assert_eq!(breakdown.is_visible(true), expected_stimulus_only);
    }

    #[rstest]
    #[case(0.0, StressLevel::None)]
    #[case(0.01, StressLevel::Low)]
    #[case(4.99, StressLevel::Low)]
    #[case(5.0, StressLevel::Moderate)]
    #[case(9.99, StressLevel::Moderate)]
    #[case(10.0, StressLevel::High)]
    #[case(27.5, StressLevel::High)]
    fn test_stress_level(#[case] value: f64, #[case] expected: StressLevel) {
        assert_eq!(StressLevel::from(value), expected);
    }
}
