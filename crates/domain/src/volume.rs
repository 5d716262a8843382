use std::{fmt, slice::Iter};

use crate::{MuscleGroup, Property};

/// Inclusive range of a landmark.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    #[must_use]
    pub fn status(self, value: f64) -> RangeStatus {
        if value < f64::from(self.min) {
            RangeStatus::Below
        } else if value > f64::from(self.max) {
            RangeStatus::Above
        } else {
            RangeStatus::Within
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RangeStatus {
    Below,
    Within,
    Above,
}

/// Weekly set volume landmarks of a muscle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VolumeLandmarks {
    /// Volume needed to keep the current muscle size (MV).
    pub maintenance: u32,
    /// Lowest volume leading to growth (MEV).
    pub minimum_effective: u32,
    /// Range of the most productive volume (MAV).
    pub maximum_adaptive: Bounds,
    /// Range of the highest volume that can still be recovered from (MRV).
    pub maximum_recoverable: Bounds,
    /// Recommended number of sessions per week.
    pub frequency: Bounds,
}

impl MuscleGroup {
    #[must_use]
    pub fn landmarks(self) -> VolumeLandmarks {
        let (mv, mev, mav, mrv, frequency) = match self {
            MuscleGroup::Chest => (4, 6, (7, 19), (20, 35), (2, 3)),
            MuscleGroup::FrontDelts => (0, 0, (0, 15), (16, 30), (2, 6)),
            MuscleGroup::SideDelts => (6, 8, (9, 24), (25, 40), (3, 6)),
            MuscleGroup::RearDelts => (0, 6, (7, 17), (18, 35), (2, 5)),
            MuscleGroup::Biceps => (4, 8, (9, 19), (20, 35), (2, 3)),
            MuscleGroup::Triceps => (4, 6, (7, 19), (20, 35), (2, 6)),
            MuscleGroup::Forearms | MuscleGroup::Calves => (0, 2, (9, 19), (20, 35), (2, 6)),
            MuscleGroup::Traps => (0, 4, (7, 24), (25, 35), (2, 6)),
            MuscleGroup::UpperBack => (6, 10, (11, 19), (20, 35), (2, 4)),
            MuscleGroup::LowerBack => (0, 0, (2, 10), (11, 20), (1, 3)),
            MuscleGroup::Core => (0, 0, (7, 24), (25, 35), (2, 6)),
            MuscleGroup::Glutes => (0, 0, (4, 16), (17, 30), (1, 3)),
            MuscleGroup::Quads => (6, 8, (9, 17), (18, 30), (2, 3)),
            MuscleGroup::Hamstrings => (3, 4, (5, 12), (13, 18), (2, 3)),
        };
        VolumeLandmarks {
            maintenance: mv,
            minimum_effective: mev,
            maximum_adaptive: Bounds {
                min: mav.0,
                max: mav.1,
            },
            maximum_recoverable: Bounds {
                min: mrv.0,
                max: mrv.1,
            },
            frequency: Bounds {
                min: frequency.0,
                max: frequency.1,
            },
        }
    }
}

impl VolumeLandmarks {
    /// Classifies a weekly volume.
    ///
    /// Each band starts at its lower landmark. The minimum effective band ends at the
    /// last whole set before the adaptive range, or at MEV itself if the adaptive range
    /// starts right there. The adaptive range includes its upper end.
    #[must_use]
    pub fn band(&self, volume: f64) -> VolumeBand {
        let adaptive_start =
            f64::from(self.minimum_effective).max(f64::from(self.maximum_adaptive.min) - 1.0);
        if volume < f64::from(self.maintenance) {
            VolumeBand::BelowMaintenance
        } else if volume < f64::from(self.minimum_effective) {
            VolumeBand::Maintenance
        } else if volume <= adaptive_start {
            VolumeBand::BelowAdaptive
        } else if volume <= f64::from(self.maximum_adaptive.max) {
            VolumeBand::Adaptive
        } else if volume <= f64::from(self.maximum_recoverable.max) {
            VolumeBand::AboveAdaptive
        } else {
            VolumeBand::AboveRecoverable
        }
    }

    #[must_use]
    pub fn advice(&self, volume: f64) -> VolumeAdvice {
        if volume < f64::from(self.minimum_effective) {
            VolumeAdvice::BelowMinimumEffective
        } else if volume < f64::from(self.maximum_adaptive.min) {
            VolumeAdvice::GrowthRange
        } else if volume <= f64::from(self.maximum_adaptive.max) {
            VolumeAdvice::OptimalRange
        } else if volume <= f64::from(self.maximum_recoverable.max) {
            VolumeAdvice::HighVolume
        } else {
            VolumeAdvice::ExceedsRecovery
        }
    }

    #[must_use]
    pub fn recommendation(&self) -> VolumeRecommendation {
        VolumeRecommendation {
            min: self.maintenance,
            optimal: self.minimum_effective,
            max: self.maximum_recoverable.max,
        }
    }

    #[must_use]
    pub fn optimal_volume(&self, level: TrainingLevel) -> u32 {
        match level {
            TrainingLevel::Beginner => self.minimum_effective,
            TrainingLevel::Intermediate => {
                (self.maximum_adaptive.min + self.maximum_adaptive.max).div_ceil(2)
            }
            TrainingLevel::Advanced => self.maximum_adaptive.max,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum VolumeBand {
    BelowMaintenance,
    Maintenance,
    BelowAdaptive,
    Adaptive,
    AboveAdaptive,
    AboveRecoverable,
}

impl VolumeBand {
    /// Color tier used to display the band.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            VolumeBand::BelowMaintenance => "blue",
            VolumeBand::Maintenance => "sky",
            VolumeBand::BelowAdaptive => "emerald",
            VolumeBand::Adaptive => "green",
            VolumeBand::AboveAdaptive => "yellow",
            VolumeBand::AboveRecoverable => "red",
        }
    }
}

impl Property for VolumeBand {
    fn iter() -> Iter<'static, VolumeBand> {
        static BANDS: [VolumeBand; 6] = [
            VolumeBand::BelowMaintenance,
            VolumeBand::Maintenance,
            VolumeBand::BelowAdaptive,
            VolumeBand::Adaptive,
            VolumeBand::AboveAdaptive,
            VolumeBand::AboveRecoverable,
        ];
        BANDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            VolumeBand::BelowMaintenance => "Below maintenance",
            VolumeBand::Maintenance => "Maintenance",
            VolumeBand::BelowAdaptive => "Minimum effective",
            VolumeBand::Adaptive => "Maximum adaptive",
            VolumeBand::AboveAdaptive => "Approaching maximum recoverable",
            VolumeBand::AboveRecoverable => "Above maximum recoverable",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VolumeAdvice {
    BelowMinimumEffective,
    GrowthRange,
    OptimalRange,
    HighVolume,
    ExceedsRecovery,
}

impl fmt::Display for VolumeAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            VolumeAdvice::BelowMinimumEffective => {
                "Below minimum effective volume - increase for growth"
            }
            VolumeAdvice::GrowthRange => "In growth range but could increase for better results",
            VolumeAdvice::OptimalRange => "In optimal growth range",
            VolumeAdvice::HighVolume => "High volume - monitor recovery carefully",
            VolumeAdvice::ExceedsRecovery => {
                "Volume may exceed recovery capacity - consider reducing"
            }
        };
        write!(f, "{text}")
    }
}

/// Simplified target range shown next to the weekly volume.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VolumeRecommendation {
    pub min: u32,
    pub optimal: u32,
    pub max: u32,
}

impl VolumeRecommendation {
    #[must_use]
    pub fn status(self, volume: f64) -> RangeStatus {
        Bounds {
            min: self.min,
            max: self.max,
        }
        .status(volume)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TrainingLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for TrainingLevel {
    fn iter() -> Iter<'static, TrainingLevel> {
        static LEVELS: [TrainingLevel; 3] = [
            TrainingLevel::Beginner,
            TrainingLevel::Intermediate,
            TrainingLevel::Advanced,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TrainingLevel::Beginner => "Beginner",
            TrainingLevel::Intermediate => "Intermediate",
            TrainingLevel::Advanced => "Advanced",
        }
    }
}

/// Weekly volume scaled by the average stimulus to fatigue ratio, rounded to whole sets.
#[must_use]
pub fn felt_volume(volume: f64, weighted_ratio: f64) -> f64 {
    (volume * weighted_ratio).round()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_landmarks_are_ordered() {
        for muscle in MuscleGroup::iter() {
            let l = muscle.landmarks();
            assert!(l.maintenance <= l.minimum_effective, "{muscle}");
            assert!(l.minimum_effective <= l.maximum_adaptive.max, "{muscle}");
            assert!(l.maximum_adaptive.min <= l.maximum_adaptive.max, "{muscle}");
            assert!(l.maximum_adaptive.max < l.maximum_recoverable.min, "{muscle}");
            assert!(l.maximum_recoverable.min <= l.maximum_recoverable.max, "{muscle}");
            assert!(l.frequency.min <= l.frequency.max, "{muscle}");
        }
    }

    #[rstest]
    #[case(0.0, VolumeBand::BelowMaintenance)]
    #[case(3.9, VolumeBand::BelowMaintenance)]
    #[case::mv(4.0, VolumeBand::Maintenance)]
    #[case(5.5, VolumeBand::Maintenance)]
    #[case::mev(6.0, VolumeBand::BelowAdaptive)]
    #[case(6.5, VolumeBand::Adaptive)]
    #[case::mav_min(7.0, VolumeBand::Adaptive)]
    #[case::mav_max(19.0, VolumeBand::Adaptive)]
    #[case(19.5, VolumeBand::AboveAdaptive)]
    #[case::mrv_min(20.0, VolumeBand::AboveAdaptive)]
    #[case::mrv_max(35.0, VolumeBand::AboveAdaptive)]
    #[case(35.5, VolumeBand::AboveRecoverable)]
    fn test_volume_band_chest(#[case] volume: f64, #[case] expected: VolumeBand) {
        assert_eq!(MuscleGroup::Chest.landmarks().band(volume), expected);
    }

    #[rstest]
    #[case(3.5, VolumeBand::Maintenance)]
    #[case::mev(4.0, VolumeBand::BelowAdaptive)]
    #[case(5.5, VolumeBand::BelowAdaptive)]
    #[case::before_mav_min(6.0, VolumeBand::BelowAdaptive)]
    #[case(6.5, VolumeBand::Adaptive)]
    #[case::mav_min(7.0, VolumeBand::Adaptive)]
    fn test_volume_band_traps(#[case] volume: f64, #[case] expected: VolumeBand) {
        assert_eq!(MuscleGroup::Traps.landmarks().band(volume), expected);
    }

    #[rstest]
    #[case(MuscleGroup::FrontDelts, 0.0, VolumeBand::BelowAdaptive)]
    #[case(MuscleGroup::FrontDelts, 0.5, VolumeBand::Adaptive)]
    #[case(MuscleGroup::FrontDelts, 15.0, VolumeBand::Adaptive)]
    #[case(MuscleGroup::FrontDelts, 15.5, VolumeBand::AboveAdaptive)]
    #[case(MuscleGroup::FrontDelts, 30.5, VolumeBand::AboveRecoverable)]
    #[case(MuscleGroup::Core, 0.0, VolumeBand::BelowAdaptive)]
    #[case(MuscleGroup::Core, 6.0, VolumeBand::BelowAdaptive)]
    #[case(MuscleGroup::Core, 6.5, VolumeBand::Adaptive)]
    #[case(MuscleGroup::LowerBack, 1.0, VolumeBand::BelowAdaptive)]
    #[case(MuscleGroup::LowerBack, 2.0, VolumeBand::Adaptive)]
    fn test_volume_band_zero_landmarks(
        #[case] muscle: MuscleGroup,
        #[case] volume: f64,
        #[case] expected: VolumeBand,
    ) {
        assert_eq!(muscle.landmarks().band(volume), expected);
    }

    #[test]
    fn test_volume_band_colors_are_distinct() {
        let colors = VolumeBand::iter()
            .map(|b| b.color())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(colors.len(), VolumeBand::iter().len());
    }

    #[rstest]
    #[case(5.0, "Below minimum effective volume - increase for growth")]
    #[case(6.0, "In growth range but could increase for better results")]
    #[case(6.5, "In growth range but could increase for better results")]
    #[case(7.0, "In optimal growth range")]
    #[case(19.0, "In optimal growth range")]
    #[case(20.0, "High volume - monitor recovery carefully")]
    #[case(35.0, "High volume - monitor recovery carefully")]
    #[case(36.0, "Volume may exceed recovery capacity - consider reducing")]
    fn test_volume_advice_chest(#[case] volume: f64, #[case] expected: &str) {
        assert_eq!(
            MuscleGroup::Chest.landmarks().advice(volume).to_string(),
            expected
        );
    }

    #[rstest]
    #[case(3.0, RangeStatus::Below)]
    #[case(4.0, RangeStatus::Within)]
    #[case(35.0, RangeStatus::Within)]
    #[case(35.5, RangeStatus::Above)]
    fn test_volume_recommendation(#[case] volume: f64, #[case] expected: RangeStatus) {
        let recommendation = MuscleGroup::Chest.landmarks().recommendation();
        assert_eq!(
            recommendation,
            VolumeRecommendation {
                min: 4,
                optimal: 6,
                max: 35
            }
        );
        assert_eq!(recommendation.status(volume), expected);
    }

    #[rstest]
    #[case(MuscleGroup::Chest, TrainingLevel::Beginner, 6)]
    #[case(MuscleGroup::Chest, TrainingLevel::Intermediate, 13)]
    #[case(MuscleGroup::Chest, TrainingLevel::Advanced, 19)]
    #[case(MuscleGroup::FrontDelts, TrainingLevel::Intermediate, 8)]
    #[case(MuscleGroup::Hamstrings, TrainingLevel::Intermediate, 9)]
    fn test_optimal_volume(
        #[case] muscle: MuscleGroup,
        #[case] level: TrainingLevel,
        #[case] expected: u32,
    ) {
        assert_eq!(muscle.landmarks().optimal_volume(level), expected);
    }

    #[rstest]
    #[case(10.0, 1.24, 12.0)]
    #[case(10.0, 1.25, 13.0)]
    #[case(0.0, 1.5, 0.0)]
    fn test_felt_volume(#[case] volume: f64, #[case] ratio: f64, #[case] expected: f64) {
        assert_eq!(felt_volume(volume, ratio), expected);
    }
}
