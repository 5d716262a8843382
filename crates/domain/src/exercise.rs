use std::{collections::BTreeMap, fmt, slice::Iter};

use derive_more::Deref;

use crate::{CreateError, DeleteError, MuscleGroup, Name, Property, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    /// Returns `None` if no catalog has been stored yet.
    async fn read_exercises(&self) -> Result<Option<Vec<ExerciseDefinition>>, ReadError>;
    async fn write_exercises(&self, exercises: &[ExerciseDefinition]) -> Result<(), UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn get_catalog(&self) -> Result<Catalog, ReadError>;
    async fn create_exercise(
        &self,
        exercise: ExerciseDefinition,
    ) -> Result<Catalog, CreateError>;
    async fn replace_exercise(
        &self,
        name: &Name,
        exercise: ExerciseDefinition,
    ) -> Result<Catalog, UpdateError>;
    async fn delete_exercise(&self, name: &Name) -> Result<Catalog, DeleteError>;
    async fn reset_catalog(&self) -> Result<Catalog, UpdateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDefinition {
    pub name: Name,
    pub category: Category,
    pub muscles: BTreeMap<MuscleGroup, Contribution>,
    pub stimulus_fatigue_ratio: Option<StimulusFatigueRatio>,
}

impl ExerciseDefinition {
    #[must_use]
    pub fn contribution(&self, muscle: MuscleGroup) -> Option<Contribution> {
        self.muscles.get(&muscle).copied()
    }
}

/// Fraction of a performed set credited to a muscle.
#[derive(Deref, Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Contribution(f64);

impl Contribution {
    pub const FULL: Contribution = Contribution(1.0);
    pub const MAX: f64 = 1.2;

    pub fn new(value: f64) -> Result<Self, ContributionError> {
        if !(value > 0.0 && value <= Self::MAX) {
            return Err(ContributionError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Contribution {
    type Error = ContributionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Contribution::new(parsed_value),
            Err(_) => Err(ContributionError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ContributionError {
    #[error("Contribution must be greater than 0.0 and at most 1.2")]
    OutOfRange,
    #[error("Contribution must be a decimal")]
    ParseError,
}

/// Ratio of hypertrophic stimulus to systemic fatigue.
///
/// Values above 1.0 mean a set is "felt" as more than one set.
#[derive(Deref, Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StimulusFatigueRatio(f64);

impl StimulusFatigueRatio {
    pub fn new(value: f64) -> Result<Self, StimulusFatigueRatioError> {
        if !(value.is_finite() && value > 0.0) {
            return Err(StimulusFatigueRatioError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for StimulusFatigueRatio {
    type Error = StimulusFatigueRatioError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => StimulusFatigueRatio::new(parsed_value),
            Err(_) => Err(StimulusFatigueRatioError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StimulusFatigueRatioError {
    #[error("Stimulus to fatigue ratio must be greater than 0.0")]
    OutOfRange,
    #[error("Stimulus to fatigue ratio must be a decimal")]
    ParseError,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Push,
    Pull,
    Legs,
    Arms,
    Core,
    FullBody,
    Uncategorized,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 7] = [
            Category::Push,
            Category::Pull,
            Category::Legs,
            Category::Arms,
            Category::Core,
            Category::FullBody,
            Category::Uncategorized,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Push => "Push",
            Category::Pull => "Pull",
            Category::Legs => "Legs",
            Category::Arms => "Arms",
            Category::Core => "Core",
            Category::FullBody => "Full Body",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Category::iter()
            .find(|c| c.name() == value)
            .copied()
            .ok_or_else(|| CategoryError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Unknown category: {0}")]
    Unknown(String),
}

/// The exercise definitions performed exercises are resolved against.
///
/// Entries keep their insertion order, which decides ties during resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    exercises: Vec<ExerciseDefinition>,
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: Vec<ExerciseDefinition>) -> Self {
        Self { exercises }
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    #[must_use]
    pub fn into_exercises(self) -> Vec<ExerciseDefinition> {
        self.exercises
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Finds the definition of a performed exercise name.
    ///
    /// An exact match is preferred, then a case-insensitive match, then a
    /// case-insensitive match ignoring surrounding whitespace. Within each
    /// tier the first entry wins.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&ExerciseDefinition> {
        if let Some(exercise) = self.exercises.iter().find(|e| e.name.as_ref() == name) {
            return Some(exercise);
        }

        let lowercase_name = name.to_lowercase();
        if let Some(exercise) = self
            .exercises
            .iter()
            .find(|e| e.name.as_ref().to_lowercase() == lowercase_name)
        {
            return Some(exercise);
        }

        let trimmed_name = lowercase_name.trim();
        self.exercises
            .iter()
            .find(|e| e.name.as_ref().trim().to_lowercase() == trimmed_name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.exercises.iter().any(|e| e.name.matches(name))
    }

    pub fn add(&mut self, exercise: ExerciseDefinition) -> Result<(), CatalogError> {
        validate(&exercise)?;

        if self.contains(exercise.name.as_ref()) {
            return Err(CatalogError::DuplicateName(exercise.name));
        }

        self.exercises.push(exercise);
        Ok(())
    }

    /// Replaces the entry called `name`, keeping its position.
    pub fn replace(
        &mut self,
        name: &Name,
        exercise: ExerciseDefinition,
    ) -> Result<(), CatalogError> {
        validate(&exercise)?;

        let Some(index) = self.exercises.iter().position(|e| e.name == *name) else {
            return Err(CatalogError::NotFound(name.clone()));
        };

        if self
            .exercises
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.name.matches(exercise.name.as_ref()))
        {
            return Err(CatalogError::DuplicateName(exercise.name));
        }

        self.exercises[index] = exercise;
        Ok(())
    }

    pub fn delete(&mut self, name: &Name) -> Result<ExerciseDefinition, CatalogError> {
        let Some(index) = self.exercises.iter().position(|e| e.name == *name) else {
            return Err(CatalogError::NotFound(name.clone()));
        };

        Ok(self.exercises.remove(index))
    }

    /// Exercises grouped by category and sorted by name, as offered for selection.
    #[must_use]
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&ExerciseDefinition>> {
        let mut result: BTreeMap<Category, Vec<&ExerciseDefinition>> = BTreeMap::new();
        for exercise in &self.exercises {
            result.entry(exercise.category).or_default().push(exercise);
        }
        for exercises in result.values_mut() {
            exercises.sort_by(|a, b| a.name.cmp(&b.name));
        }
        result
    }
}

impl From<Vec<ExerciseDefinition>> for Catalog {
    fn from(value: Vec<ExerciseDefinition>) -> Self {
        Self::new(value)
    }
}

fn validate(exercise: &ExerciseDefinition) -> Result<(), CatalogError> {
    if exercise.muscles.is_empty() {
        return Err(CatalogError::NoMuscles);
    }
    Ok(())
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("An exercise with this name already exists.")]
    DuplicateName(Name),
    #[error("Exercise not found: {0}")]
    NotFound(Name),
    #[error("An exercise must work at least one muscle.")]
    NoMuscles,
}

impl From<CatalogError> for CreateError {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::DuplicateName(_) => CreateError::Conflict,
            CatalogError::NotFound(_) | CatalogError::NoMuscles => {
                CreateError::Invalid(value.to_string())
            }
        }
    }
}

impl From<CatalogError> for UpdateError {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::DuplicateName(_) => UpdateError::Conflict,
            CatalogError::NotFound(_) => UpdateError::NotFound,
            CatalogError::NoMuscles => UpdateError::Invalid(value.to_string()),
        }
    }
}

impl From<CatalogError> for DeleteError {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::NotFound(_) => DeleteError::NotFound,
            CatalogError::DuplicateName(_) | CatalogError::NoMuscles => {
                DeleteError::Other(value.to_string().into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(name: &str, muscles: &[(MuscleGroup, f64)]) -> ExerciseDefinition {
        ExerciseDefinition {
            name: Name::new(name).unwrap(),
            category: Category::Push,
            muscles: muscles
                .iter()
                .map(|(m, c)| (*m, Contribution::new(*c).unwrap()))
                .collect(),
            stimulus_fatigue_ratio: None,
        }
    }

    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        Catalog::new(vec![
            exercise("Bench Press", &[(MuscleGroup::Chest, 1.0)]),
            exercise("bench press", &[(MuscleGroup::Triceps, 1.0)]),
            exercise("Squat", &[(MuscleGroup::Quads, 1.0)]),
            exercise("Hip Thrust ", &[(MuscleGroup::Glutes, 1.0)]),
        ])
    });

    #[rstest]
    #[case::exact("Bench Press", Some(MuscleGroup::Chest))]
    #[case::exact_before_case_insensitive("bench press", Some(MuscleGroup::Triceps))]
    #[case::case_insensitive_first_match("BENCH PRESS", Some(MuscleGroup::Chest))]
    #[case::case_insensitive("squat", Some(MuscleGroup::Quads))]
    #[case::trimmed("  squat ", Some(MuscleGroup::Quads))]
    #[case::trimmed_catalog_entry("hip thrust", Some(MuscleGroup::Glutes))]
    #[case::unresolved("Deadlift", None)]
    #[case::empty("", None)]
    fn test_catalog_resolve(#[case] name: &str, #[case] expected: Option<MuscleGroup>) {
        assert_eq!(
            CATALOG
                .resolve(name)
                .map(|e| *e.muscles.keys().next().unwrap()),
            expected
        );
    }

    #[rstest]
    #[case(0.0, Err(ContributionError::OutOfRange))]
    #[case(-0.5, Err(ContributionError::OutOfRange))]
    #[case(0.1, Ok(0.1))]
    #[case(1.2, Ok(1.2))]
    #[case(1.21, Err(ContributionError::OutOfRange))]
    #[case(f64::NAN, Err(ContributionError::OutOfRange))]
    fn test_contribution_new(#[case] value: f64, #[case] expected: Result<f64, ContributionError>) {
        assert_eq!(Contribution::new(value).map(|c| *c), expected);
    }

    #[rstest]
    #[case("0.5", Ok(0.5))]
    #[case(" 1 ", Ok(1.0))]
    #[case("2", Err(ContributionError::OutOfRange))]
    #[case("half", Err(ContributionError::ParseError))]
    fn test_contribution_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<f64, ContributionError>,
    ) {
        assert_eq!(Contribution::try_from(value).map(|c| *c), expected);
    }

    #[rstest]
    #[case(1.2, Ok(1.2))]
    #[case(0.0, Err(StimulusFatigueRatioError::OutOfRange))]
    #[case(f64::INFINITY, Err(StimulusFatigueRatioError::OutOfRange))]
    fn test_stimulus_fatigue_ratio_new(
        #[case] value: f64,
        #[case] expected: Result<f64, StimulusFatigueRatioError>,
    ) {
        assert_eq!(StimulusFatigueRatio::new(value).map(|r| *r), expected);
    }

    #[rstest]
    #[case("Full Body", Ok(Category::FullBody))]
    #[case("Push", Ok(Category::Push))]
    #[case("Cardio", Err(CategoryError::Unknown("Cardio".to_string())))]
    fn test_category_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<Category, CategoryError>,
    ) {
        assert_eq!(Category::try_from(value), expected);
    }

    #[test]
    fn test_catalog_add() {
        let mut catalog = CATALOG.clone();

        assert_eq!(
            catalog.add(exercise("SQUAT", &[(MuscleGroup::Quads, 1.0)])),
            Err(CatalogError::DuplicateName(Name::new("SQUAT").unwrap()))
        );
        assert_eq!(
            catalog.add(exercise("Deadlift", &[])),
            Err(CatalogError::NoMuscles)
        );
        assert_eq!(
            catalog.add(exercise("Deadlift", &[(MuscleGroup::Hamstrings, 1.0)])),
            Ok(())
        );
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.exercises().last().map(|e| e.name.to_string()),
            Some("Deadlift".to_string())
        );
    }

    #[test]
    fn test_catalog_replace() {
        let mut catalog = CATALOG.clone();
        let squat = Name::new("Squat").unwrap();

        assert_eq!(
            catalog.replace(&squat, exercise("squat", &[(MuscleGroup::Quads, 0.8)])),
            Ok(())
        );
        assert_eq!(catalog.exercises()[2].name.as_ref(), "squat");
        assert_eq!(
            catalog.exercises()[2].contribution(MuscleGroup::Quads),
            Some(Contribution::new(0.8).unwrap())
        );
        assert_eq!(
            catalog.replace(
                &Name::new("squat").unwrap(),
                exercise("Bench Press", &[(MuscleGroup::Quads, 1.0)])
            ),
            Err(CatalogError::DuplicateName(Name::new("Bench Press").unwrap()))
        );
        assert_eq!(
            catalog.replace(&squat, exercise("Squat", &[(MuscleGroup::Quads, 1.0)])),
            Err(CatalogError::NotFound(squat))
        );
    }

    #[test]
    fn test_catalog_delete() {
        let mut catalog = CATALOG.clone();
        let squat = Name::new("Squat").unwrap();

        assert_eq!(
            catalog.delete(&squat).map(|e| e.name),
            Ok(squat.clone())
        );
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.delete(&squat), Err(CatalogError::NotFound(squat)));
    }

    #[test]
    fn test_catalog_by_category() {
        let mut catalog = CATALOG.clone();
        catalog.exercises[2].category = Category::Legs;

        let by_category = catalog.by_category();

        assert_eq!(
            by_category.keys().copied().collect::<Vec<_>>(),
            vec![Category::Push, Category::Legs]
        );
        assert_eq!(
            by_category[&Category::Push]
                .iter()
                .map(|e| e.name.as_ref())
                .collect::<Vec<_>>(),
            vec!["Bench Press", "Hip Thrust", "bench press"]
        );
    }
}
