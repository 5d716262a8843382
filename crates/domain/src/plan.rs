use std::{fmt, slice::Iter};

use derive_more::{Deref, Display, Into};

use crate::{
    CreateError, DeleteError, Name, NameError, Property, ReadError, UpdateError,
};

#[allow(async_fn_in_trait)]
pub trait PlanRepository {
    /// Returns `None` if no plan has been stored yet.
    async fn read_plan(&self) -> Result<Option<Plan>, ReadError>;
    async fn write_plan(&self, plan: &Plan) -> Result<(), UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait RoutineRepository {
    async fn read_routines(&self) -> Result<Vec<Routine>, ReadError>;
    async fn write_routines(&self, routines: &[Routine]) -> Result<(), UpdateError>;
    async fn read_selected_routine(&self) -> Result<Option<Name>, ReadError>;
    async fn write_selected_routine(&self, name: Option<&Name>) -> Result<(), UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait PlanService {
    async fn get_plan(&self) -> Result<Plan, ReadError>;
    async fn save_plan(&self, plan: &Plan) -> Result<(), UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait RoutineService {
    async fn get_routines(&self) -> Result<Vec<Routine>, ReadError>;
    async fn create_routine(&self, name: Name, plan: Plan) -> Result<Routine, CreateError>;
    async fn rename_routine(&self, name: &Name, new_name: Name) -> Result<Routine, UpdateError>;
    async fn replace_routine(&self, routine: Routine) -> Result<Routine, UpdateError>;
    async fn delete_routine(&self, name: &Name) -> Result<Name, DeleteError>;
    async fn get_selected_routine(&self) -> Result<Option<Name>, ReadError>;
    async fn select_routine(&self, name: Option<&Name>) -> Result<(), UpdateError>;
}

/// A saved, named plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub name: Name,
    pub plan: Plan,
}

/// Checks whether `name` is free among `routines`, ignoring the routine called `except`.
#[must_use]
pub fn routine_name_available(routines: &[Routine], name: &Name, except: Option<&Name>) -> bool {
    !routines
        .iter()
        .filter(|r| except.is_none_or(|e| r.name != *e))
        .any(|r| r.name.matches(name.as_ref()))
}

/// The ordered micro cycles being edited. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    cycles: Vec<Cycle>,
}

impl Plan {
    pub fn new(cycles: Vec<Cycle>) -> Result<Self, PlanError> {
        if cycles.is_empty() {
            return Err(PlanError::LastCycle);
        }
        Ok(Self { cycles })
    }

    #[must_use]
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    #[must_use]
    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }

    pub fn cycle(&self, index: usize) -> Result<&Cycle, PlanError> {
        self.cycles.get(index).ok_or(PlanError::NoSuchCycle(index))
    }

    pub fn cycle_mut(&mut self, index: usize) -> Result<&mut Cycle, PlanError> {
        self.cycles
            .get_mut(index)
            .ok_or(PlanError::NoSuchCycle(index))
    }

    /// Appends `"Micro Cycle {n+1}"` with a single empty day and returns its index.
    pub fn add_cycle(&mut self) -> Result<usize, PlanError> {
        let name = Name::new(&format!("Micro Cycle {}", self.cycles.len() + 1))?;
        self.cycles.push(Cycle::new(name));
        Ok(self.cycles.len() - 1)
    }

    pub fn delete_cycle(&mut self, index: usize) -> Result<Cycle, PlanError> {
        self.cycle(index)?;
        if self.cycles.len() == 1 {
            return Err(PlanError::LastCycle);
        }
        Ok(self.cycles.remove(index))
    }

    /// Appends a copy named `"{name} (Copy)"` and returns its index.
    pub fn copy_cycle(&mut self, index: usize) -> Result<usize, PlanError> {
        let cycle = self.cycle(index)?;
        let copy = Cycle {
            name: cycle.name.with_suffix(COPY_SUFFIX)?,
            days: cycle.days.clone(),
        };
        self.cycles.push(copy);
        Ok(self.cycles.len() - 1)
    }

    pub fn rename_cycle(&mut self, index: usize, name: &str) -> Result<(), PlanError> {
        let name = Name::new(name)?;
        self.cycle_mut(index)?.name = name;
        Ok(())
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            cycles: vec![Cycle {
                name: Name::literal("Micro Cycle 1"),
                days: vec![Day::new(Name::literal("Day 1"))],
            }],
        }
    }
}

const COPY_SUFFIX: &str = "(Copy)";

/// A sequence of days repeated over time. The position of a day is its offset in days.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    pub name: Name,
    days: Vec<Day>,
}

impl Cycle {
    /// Creates a cycle containing a single empty `"Day 1"`.
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            name,
            days: vec![Day::new(Name::literal("Day 1"))],
        }
    }

    pub fn with_days(name: Name, days: Vec<Day>) -> Result<Self, PlanError> {
        if days.is_empty() {
            return Err(PlanError::LastDay);
        }
        Ok(Self { name, days })
    }

    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Result<&Day, PlanError> {
        self.days.get(index).ok_or(PlanError::NoSuchDay(index))
    }

    pub fn day_mut(&mut self, index: usize) -> Result<&mut Day, PlanError> {
        self.days.get_mut(index).ok_or(PlanError::NoSuchDay(index))
    }

    /// Appends an empty `"Day {n+1}"` and returns its index.
    pub fn add_day(&mut self) -> Result<usize, PlanError> {
        let name = Name::new(&format!("Day {}", self.days.len() + 1))?;
        self.days.push(Day::new(name));
        Ok(self.days.len() - 1)
    }

    pub fn delete_day(&mut self, index: usize) -> Result<Day, PlanError> {
        self.day(index)?;
        if self.days.len() == 1 {
            return Err(PlanError::LastDay);
        }
        Ok(self.days.remove(index))
    }

    /// Appends a copy named `"{name} (Copy)"` and returns its index.
    pub fn copy_day(&mut self, index: usize) -> Result<usize, PlanError> {
        let day = self.day(index)?;
        let copy = Day {
            name: day.name.with_suffix(COPY_SUFFIX)?,
            exercises: day.exercises.clone(),
        };
        self.days.push(copy);
        Ok(self.days.len() - 1)
    }

    pub fn rename_day(&mut self, index: usize, name: &str) -> Result<(), PlanError> {
        let name = Name::new(name)?;
        self.day_mut(index)?.name = name;
        Ok(())
    }

    /// Moves a day to the insertion slot `target` (`0..=len`).
    ///
    /// Slots refer to positions before the removal, so dropping a day onto its
    /// own slot or the one directly after it leaves the order unchanged.
    pub fn move_day(&mut self, source: usize, target: usize) -> Result<(), PlanError> {
        self.day(source)?;
        if target > self.days.len() {
            return Err(PlanError::NoSuchDay(target));
        }
        if target == source || target == source + 1 {
            return Ok(());
        }
        let day = self.days.remove(source);
        let target = if source < target { target - 1 } else { target };
        self.days.insert(target, day);
        Ok(())
    }

    /// Moves an exercise to the insertion slot `target` of a possibly different day.
    pub fn move_exercise(
        &mut self,
        (source_day, source_index): (usize, usize),
        (target_day, target_index): (usize, usize),
    ) -> Result<(), PlanError> {
        self.day(source_day)?.exercise(source_index)?;
        let target_len = self.day(target_day)?.exercises.len();
        if target_index > target_len {
            return Err(PlanError::NoSuchExercise(target_index));
        }
        if source_day == target_day
            && (target_index == source_index || target_index == source_index + 1)
        {
            return Ok(());
        }
        let exercise = self.days[source_day].exercises.remove(source_index);
        let target_index = if source_day == target_day && source_index < target_index {
            target_index - 1
        } else {
            target_index
        };
        self.days[target_day].exercises.insert(target_index, exercise);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub name: Name,
    pub exercises: Vec<PerformedExercise>,
}

impl Day {
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            name,
            exercises: vec![],
        }
    }

    pub fn exercise(&self, index: usize) -> Result<&PerformedExercise, PlanError> {
        self.exercises
            .get(index)
            .ok_or(PlanError::NoSuchExercise(index))
    }

    pub fn exercise_mut(&mut self, index: usize) -> Result<&mut PerformedExercise, PlanError> {
        self.exercises
            .get_mut(index)
            .ok_or(PlanError::NoSuchExercise(index))
    }

    /// Appends a blank exercise and returns its index.
    pub fn add_exercise(&mut self) -> usize {
        self.exercises.push(PerformedExercise::default());
        self.exercises.len() - 1
    }

    pub fn delete_exercise(&mut self, index: usize) -> Result<PerformedExercise, PlanError> {
        self.exercise(index)?;
        Ok(self.exercises.remove(index))
    }

    /// Inserts a copy directly after the original and returns its index.
    pub fn copy_exercise(&mut self, index: usize) -> Result<usize, PlanError> {
        let copy = self.exercise(index)?.clone();
        self.exercises.insert(index + 1, copy);
        Ok(index + 1)
    }

    pub fn toggle_superset(&mut self, index: usize) -> Result<bool, PlanError> {
        let exercise = self.exercise_mut(index)?;
        exercise.superset = !exercise.superset;
        Ok(exercise.superset)
    }
}

/// An exercise as scheduled on a day.
///
/// The exercise is referenced by name and resolved against the catalog when
/// analysing the plan, so it may name an exercise the catalog does not contain.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformedExercise {
    pub exercise_name: String,
    pub sets: Sets,
    pub set_type: SetType,
    pub intensity: Intensity,
    pub superset: bool,
}

impl Default for PerformedExercise {
    fn default() -> Self {
        Self {
            exercise_name: String::new(),
            sets: Sets::default(),
            set_type: SetType::Regular,
            intensity: Intensity::default(),
            superset: false,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, Deref, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..1000).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl Default for Sets {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 999")]
    OutOfRange,
    #[error("Sets must be an integer")]
    ParseError,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SetType {
    #[default]
    Regular,
    Dropset,
    MyoRep,
    MyoRepMatch,
}

impl Property for SetType {
    fn iter() -> Iter<'static, SetType> {
        static SET_TYPES: [SetType; 4] = [
            SetType::Regular,
            SetType::Dropset,
            SetType::MyoRep,
            SetType::MyoRepMatch,
        ];
        SET_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SetType::Regular => "Regular",
            SetType::Dropset => "Dropset",
            SetType::MyoRep => "Myo-rep",
            SetType::MyoRepMatch => "Myo-rep match",
        }
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for SetType {
    type Error = SetTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SetType::iter()
            .find(|t| t.name() == value)
            .copied()
            .ok_or_else(|| SetTypeError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SetTypeError {
    #[error("Unknown set type: {0}")]
    Unknown(String),
}

/// How hard the sets of an exercise are taken. Exactly one measure applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intensity {
    Rir(Rir),
    Rpe(Rpe),
    Percentage(Percentage),
    /// Taken by feel, without a target value.
    Flow,
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity::Rir(Rir::default())
    }
}

impl Intensity {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Intensity::Rir(_) => "rir",
            Intensity::Rpe(_) => "rpe",
            Intensity::Percentage(_) => "percentage",
            Intensity::Flow => "flow",
        }
    }

    /// Short label shown when selecting the intensity type.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Rir(_) => "RIR",
            Intensity::Rpe(_) => "RPE",
            Intensity::Percentage(_) => "%",
            Intensity::Flow => "\u{1f30a}",
        }
    }
}

/// Repetitions in reserve.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rir(u8);

impl Rir {
    pub fn new(value: u8) -> Result<Self, RirError> {
        if value > 10 {
            return Err(RirError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl Default for Rir {
    fn default() -> Self {
        Self(2)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RirError {
    #[error("RIR must be in the range 0 to 10")]
    OutOfRange,
}

/// Rating of perceived exertion, stored in tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rpe(u8);

impl Rpe {
    pub fn new(value: f64) -> Result<Self, RpeError> {
        if !(1.0..=10.0).contains(&value) {
            return Err(RpeError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0).round() as u8;

        if v % 5 != 0 || (f64::from(v) - value * 10.0).abs() > 1e-6 {
            return Err(RpeError::InvalidResolution);
        }

        Ok(Self(v))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl Default for Rpe {
    fn default() -> Self {
        Self(80)
    }
}

impl fmt::Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RpeError {
    #[error("RPE must be in the range 1.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
}

/// Load as a percentage of the one repetition maximum.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percentage(u8);

impl Percentage {
    pub fn new(value: u8) -> Result<Self, PercentageError> {
        if !(1..=100).contains(&value) {
            return Err(PercentageError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self(80)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PercentageError {
    #[error("Percentage must be in the range 1 to 100")]
    OutOfRange,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("You must have at least one micro cycle.")]
    LastCycle,
    #[error("You must have at least one day.")]
    LastDay,
    #[error("No micro cycle at position {0}")]
    NoSuchCycle(usize),
    #[error("No day at position {0}")]
    NoSuchDay(usize),
    #[error("No exercise at position {0}")]
    NoSuchExercise(usize),
    #[error(transparent)]
    InvalidName(#[from] NameError),
}
