use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{
    Catalog, Day, MuscleGroup, Property, RangeStatus, SetCounting, StimulusTable, StressBreakdown,
    VolumeAdvice, VolumeBand, decay_series, felt_volume, unresolved_exercises,
};

/// Projected cycles are at least one week long. Positions past the planned
/// days are rest days.
pub const MIN_CYCLE_LENGTH: usize = 7;

/// Derives volume and stress figures from the days of a cycle.
///
/// The per-day stimulus is extracted once on construction and shared by all
/// computations. Exercises that cannot be resolved against the catalog
/// contribute nothing and are reported by [`Engine::unresolved`].
#[derive(Debug)]
pub struct Engine<'a> {
    catalog: &'a Catalog,
    days: &'a [Day],
    actual: StimulusTable,
    felt: StimulusTable,
    unresolved: BTreeSet<String>,
}

impl<'a> Engine<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, days: &'a [Day]) -> Self {
        let unresolved = unresolved_exercises(catalog, days);
        if !unresolved.is_empty() {
            debug!(
                "ignoring unknown exercises: {}",
                unresolved
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Self {
            catalog,
            days,
            actual: StimulusTable::new(catalog, days, SetCounting::Actual),
            felt: StimulusTable::new(catalog, days, SetCounting::Felt),
            unresolved,
        }
    }

    #[must_use]
    pub fn unresolved(&self) -> &BTreeSet<String> {
        &self.unresolved
    }

    #[must_use]
    pub fn stimulus(&self, counting: SetCounting) -> &StimulusTable {
        match counting {
            SetCounting::Actual => &self.actual,
            SetCounting::Felt => &self.felt,
        }
    }

    #[must_use]
    pub fn cycle_length(&self) -> usize {
        self.days.len().max(MIN_CYCLE_LENGTH)
    }

    /// Sets per muscle over one cycle, counted as performed and without decay.
    #[must_use]
    pub fn weekly_volume(&self) -> BTreeMap<MuscleGroup, f64> {
        let mut volume: BTreeMap<MuscleGroup, f64> = BTreeMap::new();
        for day in 0..self.actual.len() {
            if let Some(stimulus) = self.actual.day(day) {
                for (muscle, value) in stimulus {
                    *volume.entry(*muscle).or_default() += value;
                }
            }
        }
        volume
    }

    /// Accumulated stress of every muscle on a day of the cycle.
    ///
    /// Only the days of the current cycle up to `day` are taken into account.
    #[must_use]
    pub fn daily_stress(
        &self,
        day: usize,
        counting: SetCounting,
    ) -> BTreeMap<MuscleGroup, StressBreakdown> {
        let table = self.stimulus(counting);
        MuscleGroup::iter()
            .map(|muscle| {
                let rate = muscle.decay_profile().rate;
                let breakdown = (0..=day).fold(StressBreakdown::default(), |previous, d| {
                    StressBreakdown::accumulate(previous.total, table.stimulus(d, *muscle), rate)
                });
                (*muscle, breakdown)
            })
            .collect()
    }

    /// Accumulated stress per muscle and day over repeated cycles.
    #[must_use]
    pub fn stress_timeline(&self, cycles: usize, counting: SetCounting) -> Timeline {
        let table = self.stimulus(counting);
        let cycle_length = self.cycle_length();
        let days = cycles * cycle_length;
        Timeline {
            cycles,
            cycle_length,
            series: MuscleGroup::iter()
                .map(|muscle| {
                    let new_stimulus =
                        (0..days).map(|d| table.stimulus(d % cycle_length, *muscle));
                    (
                        *muscle,
                        decay_series(new_stimulus, muscle.decay_profile().rate),
                    )
                })
                .collect(),
        }
    }

    /// Performed sets per muscle and day over repeated cycles.
    #[must_use]
    pub fn frequency_timeline(&self, cycles: usize) -> Timeline {
        let cycle_length = self.cycle_length();
        let days = cycles * cycle_length;
        Timeline {
            cycles,
            cycle_length,
            series: MuscleGroup::iter()
                .map(|muscle| {
                    (
                        *muscle,
                        (0..days)
                            .map(|d| self.actual.stimulus(d % cycle_length, *muscle))
                            .collect(),
                    )
                })
                .collect(),
        }
    }

    /// Muscles receiving stimulus from any resolved exercise.
    #[must_use]
    pub fn muscles_worked(&self) -> BTreeSet<MuscleGroup> {
        self.actual.muscles()
    }

    /// Number of days per cycle on which each worked muscle is trained.
    #[must_use]
    pub fn training_frequency(&self) -> BTreeMap<MuscleGroup, u32> {
        let mut frequency: BTreeMap<MuscleGroup, u32> = BTreeMap::new();
        for day in 0..self.actual.len() {
            if let Some(stimulus) = self.actual.day(day) {
                for (muscle, value) in stimulus {
                    if *value > 0.0 {
                        *frequency.entry(*muscle).or_default() += 1;
                    }
                }
            }
        }
        frequency
    }

    /// Average stimulus to fatigue ratio per muscle, weighted by the sets
    /// credited to the muscle. Exercises without a ratio are not considered.
    #[must_use]
    pub fn weighted_stimulus_fatigue_ratio(&self) -> BTreeMap<MuscleGroup, f64> {
        let mut sums: BTreeMap<MuscleGroup, (f64, f64)> = BTreeMap::new();
        for performed in self.days.iter().flat_map(|d| &d.exercises) {
            let Some(exercise) = self.catalog.resolve(&performed.exercise_name) else {
                continue;
            };
            let Some(ratio) = exercise.stimulus_fatigue_ratio else {
                continue;
            };
            let sets = f64::from(u32::from(performed.sets));
            for (muscle, contribution) in &exercise.muscles {
                let weight = sets * **contribution;
                let (weighted_sum, total_weight) = sums.entry(*muscle).or_default();
                *weighted_sum += *ratio * weight;
                *total_weight += weight;
            }
        }
        sums.into_iter()
            .filter(|(_, (_, total_weight))| *total_weight > 0.0)
            .map(|(muscle, (weighted_sum, total_weight))| (muscle, weighted_sum / total_weight))
            .collect()
    }

    #[must_use]
    pub fn sfr_coverage(&self) -> SfrCoverage {
        self.days
            .iter()
            .flat_map(|d| &d.exercises)
            .filter_map(|e| self.catalog.resolve(&e.exercise_name))
            .fold(SfrCoverage::default(), |coverage, exercise| SfrCoverage {
                total: coverage.total + 1,
                with_ratio: coverage.with_ratio
                    + u32::from(exercise.stimulus_fatigue_ratio.is_some()),
            })
    }

    /// Volume figures of every worked muscle, in display order.
    #[must_use]
    pub fn volume_summary(&self) -> Vec<MuscleSummary> {
        let volume = self.weekly_volume();
        let frequency = self.training_frequency();
        let ratio = self.weighted_stimulus_fatigue_ratio();
        MuscleGroup::iter()
            .filter_map(|muscle| {
                let volume = *volume.get(muscle)?;
                let landmarks = muscle.landmarks();
                let frequency = frequency.get(muscle).copied().unwrap_or_default();
                let ratio = ratio.get(muscle).copied();
                Some(MuscleSummary {
                    muscle: *muscle,
                    volume,
                    felt_volume: ratio.map(|r| felt_volume(volume, r)),
                    stimulus_fatigue_ratio: ratio,
                    band: landmarks.band(volume),
                    advice: landmarks.advice(volume),
                    status: landmarks.recommendation().status(volume),
                    frequency,
                    frequency_status: landmarks.frequency.status(f64::from(frequency)),
                })
            })
            .collect()
    }
}

/// Number of resolved performed exercises and how many of them have a
/// stimulus to fatigue ratio.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SfrCoverage {
    pub total: u32,
    pub with_ratio: u32,
}

impl SfrCoverage {
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.with_ratio == self.total
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MuscleSummary {
    pub muscle: MuscleGroup,
    pub volume: f64,
    pub felt_volume: Option<f64>,
    pub stimulus_fatigue_ratio: Option<f64>,
    pub band: VolumeBand,
    pub advice: VolumeAdvice,
    pub status: RangeStatus,
    pub frequency: u32,
    pub frequency_status: RangeStatus,
}

/// Per-day values of each muscle over a number of repeated cycles.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    cycles: usize,
    cycle_length: usize,
    series: BTreeMap<MuscleGroup, Vec<f64>>,
}

impl Timeline {
    #[must_use]
    pub fn cycle_length(&self) -> usize {
        self.cycle_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cycles * self.cycle_length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn series(&self, muscle: MuscleGroup) -> &[f64] {
        self.series
            .get(&muscle)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Pointwise sum of the series of the given muscles.
    #[must_use]
    pub fn cumulative(&self, muscles: &[MuscleGroup]) -> Vec<f64> {
        let mut result = vec![0.0; self.len()];
        for muscle in muscles {
            for (sum, value) in result.iter_mut().zip(self.series(*muscle)) {
                *sum += value;
            }
        }
        result
    }

    /// Axis labels, with the cycle number only if more than one cycle is shown.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        (0..self.len())
            .map(|i| {
                let day = i % self.cycle_length + 1;
                if self.cycles > 1 {
                    format!("C{} D{day}", i / self.cycle_length + 1)
                } else {
                    format!("Day {day}")
                }
            })
            .collect()
    }
}
