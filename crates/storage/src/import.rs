use log::debug;
use serde::Deserialize;
use serde_json::Value;
use setwise_domain::{self as domain, Property};

use crate::dto::{RoutineError, Weeks, WorkoutDay, WorkoutExercise, WorkoutWeek};

/// Name of the micro cycle wrapping a legacy plan consisting only of days.
const LEGACY_CYCLE_NAME: &str = "Micro Cycle 1";

/// Reads a plan from either a bare array of days or an object `{ "weeks": [...] }`.
///
/// Missing fields are replaced by defaults. Values that are present but invalid
/// reject the whole plan.
pub fn import_plan(content: &str) -> Result<domain::Plan, ImportError> {
    let weeks = match serde_json::from_str::<Value>(content)? {
        Value::Array(days) => vec![WorkoutWeek {
            name: LEGACY_CYCLE_NAME.to_string(),
            days: import_days(days)?,
        }],
        Value::Object(mut object) => match object.remove("weeks") {
            Some(Value::Array(weeks)) => weeks
                .into_iter()
                .enumerate()
                .map(|(index, week)| import_week(index, week))
                .collect::<Result<Vec<_>, _>>()?,
            _ => return Err(ImportError::UnexpectedShape),
        },
        _ => return Err(ImportError::UnexpectedShape),
    };
    let plan = domain::Plan::try_from(Weeks(weeks))?;
    debug!("imported plan with {} micro cycles", plan.cycles().len());
    Ok(plan)
}

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    #[error("Error parsing JSON file. Please check the format.")]
    Syntax(#[from] serde_json::Error),
    #[error("Invalid JSON format. Expected an array of days or weeks.")]
    UnexpectedShape,
    #[error("Invalid workout plan: {0}")]
    Invalid(#[from] RoutineError),
}

#[derive(Deserialize)]
struct ImportedWeek {
    name: Option<String>,
    days: Option<Value>,
}

#[derive(Deserialize)]
struct ImportedDay {
    name: Option<String>,
    exercises: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportedExercise {
    name: Option<String>,
    sets: Option<Value>,
    set_type: Option<String>,
    intensity_type: Option<String>,
    rir: Option<Value>,
    rpe: Option<Value>,
    percentage: Option<Value>,
    superset: Option<Value>,
}

fn import_week(index: usize, value: Value) -> Result<WorkoutWeek, ImportError> {
    let week: ImportedWeek = serde_json::from_value(value)?;
    Ok(WorkoutWeek {
        name: name_or(week.name, || format!("Week {}", index + 1)),
        days: match week.days {
            Some(Value::Array(days)) => import_days(days)?,
            _ => vec![],
        },
    })
}

fn import_days(values: Vec<Value>) -> Result<Vec<WorkoutDay>, ImportError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let day: ImportedDay = serde_json::from_value(value)?;
            Ok(WorkoutDay {
                name: name_or(day.name, || format!("Day {}", index + 1)),
                exercises: match day.exercises {
                    Some(Value::Array(exercises)) => exercises
                        .into_iter()
                        .map(import_exercise)
                        .collect::<Result<Vec<_>, _>>()?,
                    _ => vec![],
                },
            })
        })
        .collect()
}

fn import_exercise(value: Value) -> Result<WorkoutExercise, ImportError> {
    let exercise: ImportedExercise = serde_json::from_value(value)?;
    Ok(WorkoutExercise {
        name: exercise.name.unwrap_or_default(),
        sets: exercise
            .sets
            .as_ref()
            .and_then(positive_number)
            .unwrap_or_else(|| u32::from(domain::Sets::default())),
        set_type: name_or(exercise.set_type, || {
            domain::SetType::Regular.name().to_string()
        }),
        intensity_type: name_or(exercise.intensity_type, || {
            domain::Intensity::default().kind().to_string()
        }),
        rir: exercise.rir.as_ref().and_then(number),
        rpe: exercise.rpe.as_ref().and_then(number),
        percentage: exercise.percentage.as_ref().and_then(number),
        superset: exercise.superset.as_ref().is_some_and(truthy),
    })
}

fn name_or(name: Option<String>, default: impl FnOnce() -> String) -> String {
    name.filter(|n| !n.trim().is_empty()).unwrap_or_else(default)
}

/// Reads numbers and numeric strings. Anything else counts as missing.
fn number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(string) => string.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Accepts numbers and numeric strings of at least one, rounded to the nearest integer.
fn positive_number(value: &Value) -> Option<u32> {
    let number = number(value)?;
    if number < 1.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(number.round() as u32)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(string) => !string.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
