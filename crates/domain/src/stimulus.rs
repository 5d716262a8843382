use std::collections::{BTreeMap, BTreeSet};

use crate::{Catalog, Day, MuscleGroup, Sets, StimulusFatigueRatio};

/// Whether sets are counted as performed or as felt, i.e. scaled by the
/// stimulus to fatigue ratio of the exercise.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SetCounting {
    #[default]
    Actual,
    Felt,
}

/// Number of sets credited to an exercise.
///
/// Felt sets are rounded half away from zero. Exercises without a ratio are
/// counted by their actual sets in both modes.
#[must_use]
pub fn effective_sets(
    sets: Sets,
    ratio: Option<StimulusFatigueRatio>,
    counting: SetCounting,
) -> f64 {
    let sets = f64::from(u32::from(sets));
    match (counting, ratio) {
        (SetCounting::Felt, Some(ratio)) => (sets * *ratio).round(),
        _ => sets,
    }
}

/// New stimulus per day and muscle, derived once from the catalog and the planned days.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StimulusTable {
    days: Vec<BTreeMap<MuscleGroup, f64>>,
}

impl StimulusTable {
    #[must_use]
    pub fn new(catalog: &Catalog, days: &[Day], counting: SetCounting) -> Self {
        Self {
            days: days
                .iter()
                .map(|day| {
                    let mut stimulus: BTreeMap<MuscleGroup, f64> = BTreeMap::new();
                    for performed in &day.exercises {
                        let Some(exercise) = catalog.resolve(&performed.exercise_name) else {
                            continue;
                        };
                        let sets = effective_sets(
                            performed.sets,
                            exercise.stimulus_fatigue_ratio,
                            counting,
                        );
                        for (muscle, contribution) in &exercise.muscles {
                            *stimulus.entry(*muscle).or_default() += sets * **contribution;
                        }
                    }
                    stimulus
                })
                .collect(),
        }
    }

    /// Number of planned days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Stimulus of a muscle on a day. Days past the planned ones are rest days.
    #[must_use]
    pub fn stimulus(&self, day: usize, muscle: MuscleGroup) -> f64 {
        self.days
            .get(day)
            .and_then(|d| d.get(&muscle))
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn day(&self, day: usize) -> Option<&BTreeMap<MuscleGroup, f64>> {
        self.days.get(day)
    }

    /// Muscles receiving stimulus on any day.
    #[must_use]
    pub fn muscles(&self) -> BTreeSet<MuscleGroup> {
        self.days
            .iter()
            .flat_map(|d| d.iter().filter(|(_, s)| **s > 0.0).map(|(m, _)| *m))
            .collect()
    }
}

/// Names of performed exercises that cannot be resolved against the catalog.
///
/// Blank names of exercises not yet chosen are not reported.
#[must_use]
pub fn unresolved_exercises(catalog: &Catalog, days: &[Day]) -> BTreeSet<String> {
    days.iter()
        .flat_map(|d| &d.exercises)
        .filter(|e| !e.exercise_name.trim().is_empty())
        .filter(|e| catalog.resolve(&e.exercise_name).is_none())
        .map(|e| e.exercise_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        Category, Contribution, ExerciseDefinition, Name, PerformedExercise, tests::catalog,
    };

    fn performed(name: &str, sets: u32) -> PerformedExercise {
        PerformedExercise {
            exercise_name: name.to_string(),
            sets: Sets::new(sets).unwrap(),
            ..PerformedExercise::default()
        }
    }

    fn day(exercises: Vec<PerformedExercise>) -> Day {
        Day {
            name: Name::new("Day").unwrap(),
            exercises,
        }
    }

    #[rstest]
    #[case::actual_with_ratio(3, Some(1.2), SetCounting::Actual, 3.0)]
    #[case::felt_rounds_up(3, Some(1.2), SetCounting::Felt, 4.0)]
    #[case::felt_rounds_down(3, Some(0.7), SetCounting::Felt, 2.0)]
    #[case::felt_half_away_from_zero(5, Some(0.5), SetCounting::Felt, 3.0)]
    #[case::felt_without_ratio(3, None, SetCounting::Felt, 3.0)]
    #[case::actual_without_ratio(4, None, SetCounting::Actual, 4.0)]
    fn test_effective_sets(
        #[case] sets: u32,
        #[case] ratio: Option<f64>,
        #[case] counting: SetCounting,
        #[case] expected: f64,
    ) {
        assert_eq!(
            effective_sets(
                Sets::new(sets).unwrap(),
                ratio.map(|r| StimulusFatigueRatio::new(r).unwrap()),
                counting
            ),
            expected
        );
    }

    #[test]
    fn test_stimulus_table_accumulates_exercises() {
        let days = [
            day(vec![
                performed("Bench Press", 3),
                performed("Triceps Pushdown", 2),
            ]),
            day(vec![]),
        ];
        let table = StimulusTable::new(&catalog(), &days, SetCounting::Actual);

        assert_eq!(table.len(), 2);
        assert_approx_eq!(table.stimulus(0, MuscleGroup::Chest), 3.0);
        assert_approx_eq!(table.stimulus(0, MuscleGroup::Triceps), 3.5);
        assert_approx_eq!(table.stimulus(0, MuscleGroup::FrontDelts), 1.5);
        assert_eq!(table.stimulus(0, MuscleGroup::Quads), 0.0);
        assert_eq!(table.stimulus(1, MuscleGroup::Chest), 0.0);
        assert_eq!(table.stimulus(7, MuscleGroup::Chest), 0.0);
        assert_eq!(
            table.muscles(),
            BTreeSet::from([
                MuscleGroup::Chest,
                MuscleGroup::FrontDelts,
                MuscleGroup::Triceps
            ])
        );
    }

    #[test]
    fn test_stimulus_table_felt_sets() {
        let days = [day(vec![performed("Incline Dumbbell Press", 3)])];

        let actual = StimulusTable::new(&catalog(), &days, SetCounting::Actual);
        let felt = StimulusTable::new(&catalog(), &days, SetCounting::Felt);

        assert_approx_eq!(actual.stimulus(0, MuscleGroup::Chest), 3.0);
        assert_approx_eq!(felt.stimulus(0, MuscleGroup::Chest), 4.0);
        assert_approx_eq!(felt.stimulus(0, MuscleGroup::FrontDelts), 2.0);
    }

    #[test]
    fn test_stimulus_table_ignores_unresolved_exercises() {
        let with_unknown = [day(vec![
            performed("Bench Press", 3),
            performed("Zercher Carry", 5),
        ])];
        let without_unknown = [day(vec![performed("Bench Press", 3)])];

        assert_eq!(
            StimulusTable::new(&catalog(), &with_unknown, SetCounting::Felt),
            StimulusTable::new(&catalog(), &without_unknown, SetCounting::Felt)
        );
        assert_eq!(
            unresolved_exercises(&catalog(), &with_unknown),
            BTreeSet::from(["Zercher Carry".to_string()])
        );
    }

    #[test]
    fn test_unresolved_exercises_skips_blank_names() {
        let days = [day(vec![
            PerformedExercise::default(),
            performed(" bench press ", 3),
        ])];

        assert_eq!(unresolved_exercises(&catalog(), &days), BTreeSet::new());
    }

    #[test]
    fn test_stimulus_table_contributions_above_one() {
        let catalog = Catalog::new(vec![ExerciseDefinition {
            name: Name::new("Sissy Squat").unwrap(),
            category: Category::Legs,
            muscles: BTreeMap::from([(MuscleGroup::Quads, Contribution::new(1.2).unwrap())]),
            stimulus_fatigue_ratio: None,
        }]);
        let days = [day(vec![performed("Sissy Squat", 5)])];

        assert_approx_eq!(
            StimulusTable::new(&catalog, &days, SetCounting::Felt).stimulus(0, MuscleGroup::Quads),
            6.0
        );
    }
}
