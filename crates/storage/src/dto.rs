use std::collections::BTreeMap;

use setwise_domain::{self as domain, Property};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub muscles: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stimulus_fatigue: Option<f64>,
}

impl From<&domain::ExerciseDefinition> for Exercise {
    fn from(value: &domain::ExerciseDefinition) -> Self {
        Self {
            name: value.name.to_string(),
            category: value.category.name().to_string(),
            muscles: value
                .muscles
                .iter()
                .map(|(muscle, contribution)| (muscle.name().to_string(), **contribution))
                .collect(),
            stimulus_fatigue: value.stimulus_fatigue_ratio.map(|ratio| *ratio),
        }
    }
}

impl TryFrom<Exercise> for domain::ExerciseDefinition {
    type Error = ExerciseError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            category: if value.category.trim().is_empty() {
                domain::Category::Uncategorized
            } else {
                domain::Category::try_from(value.category.as_str())?
            },
            muscles: value
                .muscles
                .iter()
                .map(|(muscle, contribution)| {
                    Ok((
                        domain::MuscleGroup::try_from(muscle.as_str())?,
                        domain::Contribution::new(*contribution)?,
                    ))
                })
                .collect::<Result<BTreeMap<_, _>, ExerciseError>>()?,
            stimulus_fatigue_ratio: value
                .stimulus_fatigue
                .map(domain::StimulusFatigueRatio::new)
                .transpose()?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidCategory(#[from] domain::CategoryError),
    #[error(transparent)]
    InvalidMuscle(#[from] domain::MuscleGroupError),
    #[error(transparent)]
    InvalidContribution(#[from] domain::ContributionError),
    #[error(transparent)]
    InvalidStimulusFatigueRatio(#[from] domain::StimulusFatigueRatioError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_sets")]
    pub sets: u32,
    #[serde(default = "default_set_type")]
    pub set_type: String,
    #[serde(default = "default_intensity_type")]
    pub intensity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rir: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub superset: bool,
}

fn default_sets() -> u32 {
    u32::from(domain::Sets::default())
}

fn default_set_type() -> String {
    domain::SetType::default().name().to_string()
}

fn default_intensity_type() -> String {
    domain::Intensity::default().kind().to_string()
}

impl From<&domain::PerformedExercise> for WorkoutExercise {
    fn from(value: &domain::PerformedExercise) -> Self {
        let (rir, rpe, percentage) = match value.intensity {
            domain::Intensity::Rir(rir) => (Some(f64::from(u8::from(rir))), None, None),
            domain::Intensity::Rpe(rpe) => (None, Some(rpe.value()), None),
            domain::Intensity::Percentage(percentage) => {
                (None, None, Some(f64::from(u8::from(percentage))))
            }
            domain::Intensity::Flow => (None, None, None),
        };
        Self {
            name: value.exercise_name.clone(),
            sets: u32::from(value.sets),
            set_type: value.set_type.name().to_string(),
            intensity_type: value.intensity.kind().to_string(),
            rir,
            rpe,
            percentage,
            superset: value.superset,
        }
    }
}

impl TryFrom<WorkoutExercise> for domain::PerformedExercise {
    type Error = WorkoutExerciseError;

    /// A missing value of the selected intensity type is replaced by its default.
    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        let intensity = match value.intensity_type.as_str() {
            "rir" => domain::Intensity::Rir(match value.rir {
                Some(rir) => domain::Rir::new(whole_number("rir", rir)?)?,
                None => domain::Rir::default(),
            }),
            "rpe" => domain::Intensity::Rpe(match value.rpe {
                Some(rpe) => domain::Rpe::new(rpe)?,
                None => domain::Rpe::default(),
            }),
            "percentage" => domain::Intensity::Percentage(match value.percentage {
                Some(percentage) => {
                    domain::Percentage::new(whole_number("percentage", percentage)?)?
                }
                None => domain::Percentage::default(),
            }),
            "flow" => domain::Intensity::Flow,
            intensity_type => {
                return Err(WorkoutExerciseError::UnknownIntensityType(
                    intensity_type.to_string(),
                ));
            }
        };
        Ok(Self {
            exercise_name: value.name,
            sets: domain::Sets::new(value.sets)?,
            set_type: domain::SetType::try_from(value.set_type.as_str())?,
            intensity,
            superset: value.superset,
        })
    }
}

fn whole_number(field: &'static str, value: f64) -> Result<u8, WorkoutExerciseError> {
    if value.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&value) {
        return Err(WorkoutExerciseError::InvalidNumber { field, value });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u8)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutExerciseError {
    #[error(transparent)]
    InvalidSets(#[from] domain::SetsError),
    #[error(transparent)]
    InvalidSetType(#[from] domain::SetTypeError),
    #[error("Unknown intensity type: {0}")]
    UnknownIntensityType(String),
    #[error(transparent)]
    InvalidRir(#[from] domain::RirError),
    #[error(transparent)]
    InvalidRpe(#[from] domain::RpeError),
    #[error(transparent)]
    InvalidPercentage(#[from] domain::PercentageError),
    #[error("{field} must be a whole number, got {value}")]
    InvalidNumber { field: &'static str, value: f64 },
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutDay {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

impl From<&domain::Day> for WorkoutDay {
    fn from(value: &domain::Day) -> Self {
        Self {
            name: value.name.to_string(),
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
        }
    }
}

impl TryFrom<WorkoutDay> for domain::Day {
    type Error = RoutineError;

    fn try_from(value: WorkoutDay) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::PerformedExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutWeek {
    pub name: String,
    #[serde(default)]
    pub days: Vec<WorkoutDay>,
}

impl From<&domain::Cycle> for WorkoutWeek {
    fn from(value: &domain::Cycle) -> Self {
        Self {
            name: value.name.to_string(),
            days: value.days().iter().map(WorkoutDay::from).collect(),
        }
    }
}

impl TryFrom<WorkoutWeek> for domain::Cycle {
    type Error = RoutineError;

    fn try_from(value: WorkoutWeek) -> Result<Self, Self::Error> {
        Ok(domain::Cycle::with_days(
            domain::Name::new(&value.name)?,
            value
                .days
                .into_iter()
                .map(domain::Day::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        )?)
    }
}

/// The micro cycles of a plan in their stored order.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Weeks(pub Vec<WorkoutWeek>);

impl From<&domain::Plan> for Weeks {
    fn from(value: &domain::Plan) -> Self {
        Self(value.cycles().iter().map(WorkoutWeek::from).collect())
    }
}

impl TryFrom<Weeks> for domain::Plan {
    type Error = RoutineError;

    fn try_from(value: Weeks) -> Result<Self, Self::Error> {
        Ok(domain::Plan::new(
            value
                .0
                .into_iter()
                .map(domain::Cycle::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        )?)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SavedRoutine {
    pub name: String,
    pub weeks: Weeks,
}

impl From<&domain::Routine> for SavedRoutine {
    fn from(value: &domain::Routine) -> Self {
        Self {
            name: value.name.to_string(),
            weeks: Weeks::from(&value.plan),
        }
    }
}

impl TryFrom<SavedRoutine> for domain::Routine {
    type Error = RoutineError;

    fn try_from(value: SavedRoutine) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            plan: domain::Plan::try_from(value.weeks)?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RoutineError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidExercise(#[from] WorkoutExerciseError),
    #[error(transparent)]
    InvalidStructure(#[from] domain::PlanError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{EXERCISE, EXERCISES, PLAN, ROUTINE};

    use super::*;

    fn workout_exercise(intensity_type: &str) -> WorkoutExercise {
        WorkoutExercise {
            name: "Squat".to_string(),
            sets: 3,
            set_type: "Regular".to_string(),
            intensity_type: intensity_type.to_string(),
            rir: None,
            rpe: None,
            percentage: None,
            superset: false,
        }
    }

    #[test]
    fn test_exercise_try_from() {
        for exercise in EXERCISES.iter() {
            assert_eq!(
                domain::ExerciseDefinition::try_from(Exercise::from(exercise)),
                Ok(exercise.clone())
            );
        }
    }

    #[test]
    fn test_exercise_serde() {
        let serialized = json!(Exercise::from(&*EXERCISE));

        assert_eq!(
            serialized,
            json!({
                "name": "Bench Press",
                "category": "Push",
                "muscles": { "Chest": 1.0, "Front Delts": 0.5, "Triceps": 0.5 },
                "stimulusFatigue": 1.2,
            })
        );
        assert_eq!(
            serde_json::from_value::<Exercise>(serialized).unwrap(),
            Exercise::from(&*EXERCISE)
        );
    }

    #[test]
    fn test_exercise_without_category_or_ratio() {
        let exercise: Exercise =
            serde_json::from_value(json!({ "name": "Plank", "muscles": { "Core": 1 } })).unwrap();

        let definition = domain::ExerciseDefinition::try_from(exercise).unwrap();

        assert_eq!(definition.category, domain::Category::Uncategorized);
        assert_eq!(definition.stimulus_fatigue_ratio, None);
    }

    #[rstest]
    #[case::unknown_muscle(
        json!({ "name": "Neck Curl", "category": "Arms", "muscles": { "Neck": 1.0 } }),
        ExerciseError::InvalidMuscle(domain::MuscleGroupError::Unknown("Neck".to_string()))
    )]
    #[case::unknown_category(
        json!({ "name": "Curl", "category": "Cardio", "muscles": { "Biceps": 1.0 } }),
        ExerciseError::InvalidCategory(domain::CategoryError::Unknown("Cardio".to_string()))
    )]
    #[case::contribution_out_of_range(
        json!({ "name": "Curl", "category": "Arms", "muscles": { "Biceps": 1.5 } }),
        ExerciseError::InvalidContribution(domain::ContributionError::OutOfRange)
    )]
    #[case::empty_name(
        json!({ "name": " ", "category": "Arms", "muscles": { "Biceps": 1.0 } }),
        ExerciseError::InvalidName(domain::NameError::Empty)
    )]
    fn test_exercise_try_from_invalid(
        #[case] value: serde_json::Value,
        #[case] expected: ExerciseError,
    ) {
        let exercise: Exercise = serde_json::from_value(value).unwrap();
        assert_eq!(domain::ExerciseDefinition::try_from(exercise), Err(expected));
    }

    #[rstest]
    #[case::rir(
        domain::Intensity::Rir(domain::Rir::new(0).unwrap()),
        json!({ "intensityType": "rir", "rir": 0.0 })
    )]
    #[case::rpe(
        domain::Intensity::Rpe(domain::Rpe::new(8.5).unwrap()),
        json!({ "intensityType": "rpe", "rpe": 8.5 })
    )]
    #[case::percentage(
        domain::Intensity::Percentage(domain::Percentage::new(75).unwrap()),
        json!({ "intensityType": "percentage", "percentage": 75.0 })
    )]
    #[case::flow(domain::Intensity::Flow, json!({ "intensityType": "flow" }))]
    fn test_workout_exercise_intensity(
        #[case] intensity: domain::Intensity,
        #[case] expected: serde_json::Value,
    ) {
        let performed = domain::PerformedExercise {
            exercise_name: "Squat".to_string(),
            sets: domain::Sets::new(5).unwrap(),
            set_type: domain::SetType::MyoRepMatch,
            intensity,
            superset: true,
        };
        let mut expected_json = json!({
            "name": "Squat",
            "sets": 5,
            "setType": "Myo-rep match",
            "superset": true,
        });
        for (key, value) in expected.as_object().unwrap() {
            expected_json[key] = value.clone();
        }

        let serialized = json!(WorkoutExercise::from(&performed));

        assert_eq!(serialized, expected_json);
        assert_eq!(
            domain::PerformedExercise::try_from(
                serde_json::from_value::<WorkoutExercise>(serialized).unwrap()
            ),
            Ok(performed)
        );
    }

    #[rstest]
    #[case::rir("rir", domain::Intensity::Rir(domain::Rir::default()))]
    #[case::rpe("rpe", domain::Intensity::Rpe(domain::Rpe::default()))]
    #[case::percentage(
        "percentage",
        domain::Intensity::Percentage(domain::Percentage::default())
    )]
    fn test_workout_exercise_missing_intensity_value(
        #[case] intensity_type: &str,
        #[case] expected: domain::Intensity,
    ) {
        assert_eq!(
            domain::PerformedExercise::try_from(workout_exercise(intensity_type))
                .unwrap()
                .intensity,
            expected
        );
    }

    #[test]
    fn test_workout_exercise_without_types() {
        let exercise: WorkoutExercise =
            serde_json::from_value(json!({ "name": "Squat", "sets": 4, "rir": 1 })).unwrap();

        assert_eq!(
            domain::PerformedExercise::try_from(exercise),
            Ok(domain::PerformedExercise {
                exercise_name: "Squat".to_string(),
                sets: domain::Sets::new(4).unwrap(),
                set_type: domain::SetType::Regular,
                intensity: domain::Intensity::Rir(domain::Rir::new(1).unwrap()),
                superset: false,
            })
        );
    }

    #[rstest]
    #[case::unknown_intensity_type(
        workout_exercise("tempo"),
        WorkoutExerciseError::UnknownIntensityType("tempo".to_string())
    )]
    #[case::unknown_set_type(
        WorkoutExercise { set_type: "Cluster".to_string(), ..workout_exercise("rir") },
        WorkoutExerciseError::InvalidSetType(domain::SetTypeError::Unknown("Cluster".to_string()))
    )]
    #[case::zero_sets(
        WorkoutExercise { sets: 0, ..workout_exercise("rir") },
        WorkoutExerciseError::InvalidSets(domain::SetsError::OutOfRange)
    )]
    #[case::rir_out_of_range(
        WorkoutExercise { rir: Some(11.0), ..workout_exercise("rir") },
        WorkoutExerciseError::InvalidRir(domain::RirError::OutOfRange)
    )]
    #[case::fractional_rir(
        WorkoutExercise { rir: Some(1.5), ..workout_exercise("rir") },
        WorkoutExerciseError::InvalidNumber { field: "rir", value: 1.5 }
    )]
    #[case::rpe_resolution(
        WorkoutExercise { rpe: Some(7.3), ..workout_exercise("rpe") },
        WorkoutExerciseError::InvalidRpe(domain::RpeError::InvalidResolution)
    )]
    #[case::percentage_out_of_range(
        WorkoutExercise { percentage: Some(0.0), ..workout_exercise("percentage") },
        WorkoutExerciseError::InvalidPercentage(domain::PercentageError::OutOfRange)
    )]
    fn test_workout_exercise_try_from_invalid(
        #[case] value: WorkoutExercise,
        #[case] expected: WorkoutExerciseError,
    ) {
        assert_eq!(domain::PerformedExercise::try_from(value), Err(expected));
    }

    #[test]
    fn test_weeks_try_from() {
        assert_eq!(domain::Plan::try_from(Weeks::from(&*PLAN)), Ok(PLAN.clone()));
    }

    #[test]
    fn test_weeks_serialize_as_array() {
        let serialized = json!(Weeks::from(&domain::Plan::default()));

        assert_eq!(
            serialized,
            json!([{ "name": "Micro Cycle 1", "days": [{ "name": "Day 1", "exercises": [] }] }])
        );
    }

    #[rstest]
    #[case::no_weeks(json!([]), RoutineError::InvalidStructure(domain::PlanError::LastCycle))]
    #[case::no_days(
        json!([{ "name": "Week 1", "days": [] }]),
        RoutineError::InvalidStructure(domain::PlanError::LastDay)
    )]
    #[case::empty_day_name(
        json!([{ "name": "Week 1", "days": [{ "name": "", "exercises": [] }] }]),
        RoutineError::InvalidName(domain::NameError::Empty)
    )]
    fn test_weeks_try_from_invalid(#[case] value: serde_json::Value, #[case] expected: RoutineError) {
        let weeks: Weeks = serde_json::from_value(value).unwrap();
        assert_eq!(domain::Plan::try_from(weeks), Err(expected));
    }

    #[test]
    fn test_saved_routine_try_from() {
        assert_eq!(
            domain::Routine::try_from(SavedRoutine::from(&*ROUTINE)),
            Ok(ROUTINE.clone())
        );
    }

    #[test]
    fn test_saved_routine_serde() {
        let serialized = json!(SavedRoutine::from(&*ROUTINE));

        assert_eq!(serialized["name"], json!("Push Pull Legs"));
        assert!(serialized["weeks"].is_array());
        assert_eq!(
            serde_json::from_value::<SavedRoutine>(serialized).unwrap(),
            SavedRoutine::from(&*ROUTINE)
        );
    }
}
