use std::collections::BTreeMap;

use crate::{
    Category, Contribution, Cycle, Day, ExerciseDefinition, MuscleGroup, Name, PerformedExercise,
    Plan, Sets, StimulusFatigueRatio,
};

struct BaseExercise {
    name: &'static str,
    category: Category,
    muscles: &'static [(MuscleGroup, f64)],
    stimulus_fatigue_ratio: f64,
}

impl BaseExercise {
    fn definition(&self) -> Option<ExerciseDefinition> {
        Some(ExerciseDefinition {
            name: Name::new(self.name).ok()?,
            category: self.category,
            muscles: self
                .muscles
                .iter()
                .map(|(muscle, contribution)| Some((*muscle, Contribution::new(*contribution).ok()?)))
                .collect::<Option<BTreeMap<_, _>>>()?,
            stimulus_fatigue_ratio: StimulusFatigueRatio::new(self.stimulus_fatigue_ratio).ok(),
        })
    }
}

/// The exercises offered before the user has stored a catalog of their own.
#[must_use]
pub fn default_exercises() -> Vec<ExerciseDefinition> {
    DEFAULT_EXERCISES
        .iter()
        .filter_map(BaseExercise::definition)
        .collect()
}

/// A push, pull and legs split trained twice per week.
#[must_use]
pub fn default_plan() -> Plan {
    let days = DEFAULT_DAYS
        .iter()
        .map(|&(name, exercises)| Day {
            name: Name::literal(name),
            exercises: exercises
                .iter()
                .map(|&(exercise_name, sets, superset)| PerformedExercise {
                    exercise_name: exercise_name.to_string(),
                    sets: Sets::new(sets).unwrap_or_default(),
                    superset,
                    ..PerformedExercise::default()
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    match Cycle::with_days(Name::literal("Micro Cycle 1"), days) {
        Ok(cycle) => Plan::new(vec![cycle]).unwrap_or_default(),
        Err(_) => Plan::default(),
    }
}

type DefaultDay = (&'static str, &'static [(&'static str, u32, bool)]);

static DEFAULT_DAYS: [DefaultDay; 6] = [
    (
        "Push A",
        &[
            ("Cambered Bar Bench Press", 3, false),
            ("Arnold Press (Dumbbells)", 3, false),
            ("Dips (Bodyweight)", 3, false),
            ("Lateral Raise", 4, true),
            ("Lat Pullovers (EZ Bar)", 4, true),
            ("Wrist Curls (Barbell)", 3, false),
        ],
    ),
    (
        "Legs A",
        &[
            ("Squat", 3, false),
            ("Romanian Deadlift", 3, true),
            ("Shrugs (Barbell)", 3, false),
            ("Bulgarian Split Squats (Smith Machine)", 3, false),
            ("Leg Extensions (Machine)", 3, false),
            ("Lying Leg Curls (Machine)", 3, false),
            ("Standing Calf Raises (Machine)", 3, false),
            ("Cable Crunch", 3, false),
        ],
    ),
    (
        "Pull A",
        &[
            ("Barbell Row", 3, true),
            ("Shrugs (Barbell)", 3, false),
            ("Pull-Up", 3, false),
            ("Face Pulls with Rope (Cable)", 3, false),
            ("Lat Prayer (Cable)", 3, true),
            ("Cable Bicep Curls", 3, false),
            ("Standing Calf Raises (Machine)", 3, false),
        ],
    ),
    (
        "Push B",
        &[
            ("Push Press (Barbell)", 3, false),
            ("Dumbbell Bench Press", 3, false),
            ("Cable Fly", 3, true),
            ("Lateral Raises (Cable)", 3, false),
            ("Overhead Triceps Extensions (Cable)", 3, true),
            ("Rear Delt Flyes (Cable)", 3, false),
        ],
    ),
    (
        "Legs B",
        &[
            ("Deadlift", 1, false),
            ("Deficit Deadlifts (Trap Bar)", 3, false),
            ("Leg Press (Machine)", 4, true),
            ("Calf Raises on Leg Press (Machine)", 4, false),
            ("Glute Ham Raise", 3, false),
            ("Cable Crunch", 3, true),
            ("Wrist Curls (Barbell)", 3, false),
        ],
    ),
    (
        "Pull B",
        &[
            ("Pull-Up", 3, false),
            ("Machine Row", 3, false),
            ("Shrugs (Barbell)", 3, false),
            ("Cable Bicep Curls", 3, true),
            ("Lateral Raise", 3, true),
            ("Rear Delt Flyes (Cable)", 3, false),
            ("Raise Extension (Dumbbells)", 3, true),
            ("Standing Calf Raises (Machine)", 3, false),
        ],
    ),
];

const DEFAULT_EXERCISES: [BaseExercise; 102] = [
    BaseExercise {
        name: "Barbell Bench Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::Triceps, 0.5),
            (MuscleGroup::FrontDelts, 0.5),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Dumbbell Bench Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::Triceps, 0.5),
            (MuscleGroup::FrontDelts, 0.5),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Incline Barbell Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::FrontDelts, 0.6),
            (MuscleGroup::Triceps, 0.5),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Incline Dumbbell Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::FrontDelts, 0.5),
            (MuscleGroup::Triceps, 0.5),
        ],
        stimulus_fatigue_ratio: 1.2,
    },
    BaseExercise {
        name: "Decline Bench Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::Triceps, 0.5),
            (MuscleGroup::FrontDelts, 0.3),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Decline Dumbbell Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::Triceps, 0.5),
            (MuscleGroup::FrontDelts, 0.3),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Cambered Bar Bench Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::Triceps, 0.5),
            (MuscleGroup::FrontDelts, 0.4),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Cambered Bar Incline Bench Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::FrontDelts, 0.5),
            (MuscleGroup::Triceps, 0.5),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Machine Chest Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::Triceps, 0.4),
            (MuscleGroup::FrontDelts, 0.4),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Cable Fly",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::FrontDelts, 0.2),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Dumbbell Fly",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::FrontDelts, 0.2),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Pec Deck",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::FrontDelts, 0.2),
        ],
        stimulus_fatigue_ratio: 0.6,
    },
    BaseExercise {
        name: "Pushup",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 1.0),
            (MuscleGroup::Triceps, 0.6),
            (MuscleGroup::FrontDelts, 0.4),
            (MuscleGroup::Core, 0.3),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Dips (Bodyweight)",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Chest, 0.7),
            (MuscleGroup::Triceps, 1.0),
            (MuscleGroup::FrontDelts, 0.3),
            (MuscleGroup::Core, 0.2),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Fly Curl (Dumbbells)",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Chest, 0.7),
            (MuscleGroup::Biceps, 0.3),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Fly Curl (Cable)",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Chest, 0.7),
            (MuscleGroup::Biceps, 0.3),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Overhead Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::FrontDelts, 1.0),
            (MuscleGroup::SideDelts, 0.5),
            (MuscleGroup::Triceps, 0.5),
            (MuscleGroup::Core, 0.2),
            (MuscleGroup::Traps, 0.1),
        ],
        stimulus_fatigue_ratio: 1.5,
    },
    BaseExercise {
        name: "Push Press (Barbell)",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::FrontDelts, 1.0),
            (MuscleGroup::SideDelts, 0.3),
            (MuscleGroup::Triceps, 0.3),
            (MuscleGroup::Quads, 0.2),
            (MuscleGroup::Core, 0.3),
        ],
        stimulus_fatigue_ratio: 1.4,
    },
    BaseExercise {
        name: "Arnold Press (Dumbbells)",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::FrontDelts, 1.0),
            (MuscleGroup::SideDelts, 0.7),
            (MuscleGroup::Triceps, 0.3),
            (MuscleGroup::Traps, 0.2),
            (MuscleGroup::Core, 0.1),
        ],
        stimulus_fatigue_ratio: 1.3,
    },
    BaseExercise {
        name: "Front Raises (Dumbbells)",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::FrontDelts, 1.0),
        ],
        stimulus_fatigue_ratio: 0.5,
    },
    BaseExercise {
        name: "Lu Raises",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::FrontDelts, 1.0),
            (MuscleGroup::SideDelts, 0.6),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Pike Pushups",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::FrontDelts, 1.0),
            (MuscleGroup::SideDelts, 0.4),
            (MuscleGroup::Triceps, 0.6),
            (MuscleGroup::Core, 0.3),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Handstand Pushups",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::FrontDelts, 1.0),
            (MuscleGroup::SideDelts, 0.5),
            (MuscleGroup::Triceps, 0.8),
            (MuscleGroup::Core, 0.4),
        ],
        stimulus_fatigue_ratio: 1.5,
    },
    BaseExercise {
        name: "Lateral Raise",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::SideDelts, 1.0),
        ],
        stimulus_fatigue_ratio: 0.5,
    },
    BaseExercise {
        name: "Lateral Raises (Cable)",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::SideDelts, 1.0),
        ],
        stimulus_fatigue_ratio: 0.5,
    },
    BaseExercise {
        name: "Incline Lateral Raises (Dumbbells)",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::SideDelts, 1.0),
        ],
        stimulus_fatigue_ratio: 0.5,
    },
    BaseExercise {
        name: "Face Pulls with Rope (Cable)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::RearDelts, 1.0),
            (MuscleGroup::UpperBack, 0.3),
            (MuscleGroup::Traps, 0.2),
        ],
        stimulus_fatigue_ratio: 0.6,
    },
    BaseExercise {
        name: "Reverse Flyes (Dumbbells)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::RearDelts, 1.0),
            (MuscleGroup::UpperBack, 0.2),
            (MuscleGroup::Traps, 0.1),
        ],
        stimulus_fatigue_ratio: 0.6,
    },
    BaseExercise {
        name: "Rear Delt Flyes (Cable)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::RearDelts, 1.0),
        ],
        stimulus_fatigue_ratio: 0.6,
    },
    BaseExercise {
        name: "Rear Delt Rows",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::RearDelts, 1.0),
            (MuscleGroup::UpperBack, 0.3),
            (MuscleGroup::Traps, 0.2),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Close Grip Bench Press",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Triceps, 1.0),
            (MuscleGroup::Chest, 0.6),
            (MuscleGroup::FrontDelts, 0.4),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Diamond Pushups",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Triceps, 1.0),
            (MuscleGroup::Chest, 0.6),
            (MuscleGroup::FrontDelts, 0.3),
            (MuscleGroup::Core, 0.2),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Tricep Dips (Bench)",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::Triceps, 1.0),
            (MuscleGroup::Chest, 0.4),
            (MuscleGroup::FrontDelts, 0.3),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Skull Crushers (Dumbbells)",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Triceps, 1.0),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Lying Triceps Extension",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Triceps, 1.0),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Overhead Tricep Extension (Dumbbell)",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Triceps, 1.0),
            (MuscleGroup::Core, 0.1),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Overhead Triceps Extensions (Cable)",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Triceps, 1.0),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Triceps Pushdown (Rope)",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Triceps, 1.0),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Raise Extension (Dumbbells)",
        category: Category::Push,
        muscles: &[
            (MuscleGroup::FrontDelts, 1.0),
            (MuscleGroup::Triceps, 0.7),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Barbell Curl",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Biceps, 1.0),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Curls (EZ Bar)",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Biceps, 1.0),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Incline Dumbbell Curl",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Biceps, 1.0),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Preacher Curls",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Biceps, 1.0),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Cable Bicep Curls",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Biceps, 1.0),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Concentration Curls",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Biceps, 1.0),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Lying Dumbbell Curl",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Biceps, 1.0),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Clown Curl",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Biceps, 1.0),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Hammer Curls",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Biceps, 0.7),
            (MuscleGroup::Forearms, 0.3),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Chin-Ups",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.8),
            (MuscleGroup::Forearms, 0.3),
            (MuscleGroup::Core, 0.1),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Barbell Row",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.5),
            (MuscleGroup::RearDelts, 0.3),
            (MuscleGroup::LowerBack, 0.2),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 1.3,
    },
    BaseExercise {
        name: "Pendlay Rows (Barbell)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::RearDelts, 0.3),
            (MuscleGroup::LowerBack, 0.3),
            (MuscleGroup::Biceps, 0.2),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 1.4,
    },
    BaseExercise {
        name: "T-Bar Row",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.5),
            (MuscleGroup::RearDelts, 0.4),
            (MuscleGroup::LowerBack, 0.3),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 1.3,
    },
    BaseExercise {
        name: "One-Arm Dumbbell Row",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.5),
            (MuscleGroup::RearDelts, 0.3),
            (MuscleGroup::Core, 0.2),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Seated Cable Row (Wide Grip)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::RearDelts, 0.4),
            (MuscleGroup::Biceps, 0.3),
            (MuscleGroup::Traps, 0.2),
            (MuscleGroup::LowerBack, 0.3),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Rows with Close Grip (Cable)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.5),
            (MuscleGroup::RearDelts, 0.1),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Chest-Supported Row",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.4),
            (MuscleGroup::RearDelts, 0.3),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Machine Row",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.4),
            (MuscleGroup::RearDelts, 0.2),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Inverted Rows",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.4),
            (MuscleGroup::RearDelts, 0.3),
            (MuscleGroup::Core, 0.2),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Meadows Row",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.4),
            (MuscleGroup::RearDelts, 0.3),
            (MuscleGroup::Core, 0.3),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Landmine Row",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.5),
            (MuscleGroup::RearDelts, 0.3),
            (MuscleGroup::Core, 0.4),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 1.2,
    },
    BaseExercise {
        name: "Seal Row",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.4),
            (MuscleGroup::RearDelts, 0.3),
            (MuscleGroup::Forearms, 0.1),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Pull-Up",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.5),
            (MuscleGroup::Forearms, 0.3),
            (MuscleGroup::Core, 0.1),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Pull-Ups with Close Overhand Grip",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.5),
            (MuscleGroup::Forearms, 0.3),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Lat Pulldowns (Cable)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::Biceps, 0.3),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Lat Pullovers (EZ Bar)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 0.5),
            (MuscleGroup::Chest, 0.5),
            (MuscleGroup::Triceps, 0.5),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Lat Pullovers (DB)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 0.5),
            (MuscleGroup::Chest, 0.5),
            (MuscleGroup::Triceps, 0.5),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Lat Prayer (Cable)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::UpperBack, 0.5),
            (MuscleGroup::Chest, 0.5),
            (MuscleGroup::Triceps, 0.5),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Deficit Deadlifts (Trap Bar)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::Hamstrings, 1.0),
            (MuscleGroup::Glutes, 1.0),
            (MuscleGroup::UpperBack, 1.0),
            (MuscleGroup::LowerBack, 0.5),
            (MuscleGroup::Core, 0.3),
            (MuscleGroup::Traps, 0.2),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 2.1,
    },
    BaseExercise {
        name: "Shrugs (Barbell)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::Traps, 1.0),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Shrugs (Trap Bar)",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::Traps, 1.0),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Wrist Curls (Barbell)",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Forearms, 1.0),
        ],
        stimulus_fatigue_ratio: 0.6,
    },
    BaseExercise {
        name: "Reverse Wrist Curls (Barbell)",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Forearms, 1.0),
        ],
        stimulus_fatigue_ratio: 0.6,
    },
    BaseExercise {
        name: "Wrist Roller",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Forearms, 1.0),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Gripper",
        category: Category::Arms,
        muscles: &[
            (MuscleGroup::Forearms, 1.0),
        ],
        stimulus_fatigue_ratio: 0.5,
    },
    BaseExercise {
        name: "Squat",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.5),
            (MuscleGroup::Core, 0.2),
            (MuscleGroup::LowerBack, 0.5),
        ],
        stimulus_fatigue_ratio: 2.0,
    },
    BaseExercise {
        name: "Front Squat",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.5),
            (MuscleGroup::Core, 0.4),
            (MuscleGroup::UpperBack, 0.3),
            (MuscleGroup::FrontDelts, 0.2),
        ],
        stimulus_fatigue_ratio: 1.9,
    },
    BaseExercise {
        name: "Hack Squat (Machine)",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.4),
            (MuscleGroup::Hamstrings, 0.1),
        ],
        stimulus_fatigue_ratio: 1.4,
    },
    BaseExercise {
        name: "Belt Squat",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.7),
            (MuscleGroup::Hamstrings, 0.2),
        ],
        stimulus_fatigue_ratio: 1.5,
    },
    BaseExercise {
        name: "Leg Press (Machine)",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.5),
            (MuscleGroup::Hamstrings, 0.2),
        ],
        stimulus_fatigue_ratio: 1.2,
    },
    BaseExercise {
        name: "Leg Extensions (Machine)",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
        ],
        stimulus_fatigue_ratio: 0.8,
    },
    BaseExercise {
        name: "Walking Lunges",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.8),
            (MuscleGroup::Hamstrings, 0.3),
            (MuscleGroup::Core, 0.3),
            (MuscleGroup::Calves, 0.2),
        ],
        stimulus_fatigue_ratio: 1.3,
    },
    BaseExercise {
        name: "Stationary Lunges",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.7),
            (MuscleGroup::Hamstrings, 0.3),
            (MuscleGroup::Core, 0.2),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Reverse Lunges",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.8),
            (MuscleGroup::Hamstrings, 0.4),
            (MuscleGroup::Core, 0.2),
        ],
        stimulus_fatigue_ratio: 1.2,
    },
    BaseExercise {
        name: "Lateral Lunges",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.7),
            (MuscleGroup::Hamstrings, 0.3),
            (MuscleGroup::Core, 0.3),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Bulgarian Split Squats (Smith Machine)",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Glutes, 0.7),
            (MuscleGroup::Core, 0.2),
        ],
        stimulus_fatigue_ratio: 1.3,
    },
    BaseExercise {
        name: "Reverse Nordic Hamstring Curl",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Quads, 1.0),
            (MuscleGroup::Core, 0.3),
            (MuscleGroup::Hamstrings, 0.2),
        ],
        stimulus_fatigue_ratio: 1.2,
    },
    BaseExercise {
        name: "Sumo Deadlift",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::Glutes, 1.0),
            (MuscleGroup::Hamstrings, 0.8),
            (MuscleGroup::Quads, 0.6),
            (MuscleGroup::UpperBack, 0.4),
            (MuscleGroup::LowerBack, 0.7),
            (MuscleGroup::Core, 0.3),
            (MuscleGroup::Traps, 0.2),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 1.9,
    },
    BaseExercise {
        name: "Deadlift",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::Hamstrings, 1.0),
            (MuscleGroup::Glutes, 1.0),
            (MuscleGroup::UpperBack, 0.5),
            (MuscleGroup::LowerBack, 0.7),
            (MuscleGroup::Core, 0.3),
            (MuscleGroup::Traps, 0.2),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 2.0,
    },
    BaseExercise {
        name: "Romanian Deadlift",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::Hamstrings, 1.0),
            (MuscleGroup::Glutes, 0.8),
            (MuscleGroup::LowerBack, 0.4),
            (MuscleGroup::Forearms, 0.2),
            (MuscleGroup::Traps, 0.1),
            (MuscleGroup::Core, 0.2),
        ],
        stimulus_fatigue_ratio: 1.5,
    },
    BaseExercise {
        name: "Stiff Leg Deadlift",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::Hamstrings, 1.0),
            (MuscleGroup::Glutes, 0.7),
            (MuscleGroup::LowerBack, 0.5),
            (MuscleGroup::Core, 0.2),
            (MuscleGroup::Forearms, 0.2),
        ],
        stimulus_fatigue_ratio: 1.4,
    },
    BaseExercise {
        name: "Leg Curl",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Hamstrings, 1.0),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Lying Leg Curls (Machine)",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Hamstrings, 1.0),
        ],
        stimulus_fatigue_ratio: 0.7,
    },
    BaseExercise {
        name: "Glute Ham Raise",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Hamstrings, 0.7),
            (MuscleGroup::Glutes, 1.0),
            (MuscleGroup::LowerBack, 0.3),
            (MuscleGroup::Core, 0.2),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Barbell Hip Thrust",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Glutes, 1.0),
            (MuscleGroup::Hamstrings, 0.3),
            (MuscleGroup::Quads, 0.1),
            (MuscleGroup::Core, 0.2),
        ],
        stimulus_fatigue_ratio: 1.0,
    },
    BaseExercise {
        name: "Standing Calf Raises (Machine)",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Calves, 1.0),
        ],
        stimulus_fatigue_ratio: 0.6,
    },
    BaseExercise {
        name: "Calf Raises on Leg Press (Machine)",
        category: Category::Legs,
        muscles: &[
            (MuscleGroup::Calves, 1.0),
        ],
        stimulus_fatigue_ratio: 0.6,
    },
    BaseExercise {
        name: "Good Morning",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::LowerBack, 1.0),
            (MuscleGroup::Hamstrings, 0.8),
            (MuscleGroup::Glutes, 0.6),
            (MuscleGroup::Core, 0.3),
        ],
        stimulus_fatigue_ratio: 1.2,
    },
    BaseExercise {
        name: "Hyperextensions on Roman Chair",
        category: Category::Pull,
        muscles: &[
            (MuscleGroup::Glutes, 0.5),
            (MuscleGroup::LowerBack, 1.0),
            (MuscleGroup::Hamstrings, 0.3),
        ],
        stimulus_fatigue_ratio: 0.9,
    },
    BaseExercise {
        name: "Cable Crunch",
        category: Category::Core,
        muscles: &[
            (MuscleGroup::Core, 1.0),
            (MuscleGroup::Forearms, 0.3),
            (MuscleGroup::UpperBack, 0.2),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Hanging Leg Raises",
        category: Category::Core,
        muscles: &[
            (MuscleGroup::Core, 1.0),
            (MuscleGroup::Forearms, 0.3),
            (MuscleGroup::UpperBack, 0.2),
        ],
        stimulus_fatigue_ratio: 1.1,
    },
    BaseExercise {
        name: "Ab Wheel Rollouts",
        category: Category::Core,
        muscles: &[
            (MuscleGroup::Core, 1.0),
            (MuscleGroup::FrontDelts, 0.4),
            (MuscleGroup::Triceps, 0.3),
            (MuscleGroup::UpperBack, 0.2),
        ],
        stimulus_fatigue_ratio: 1.3,
    },
    BaseExercise {
        name: "Farmers Walk",
        category: Category::FullBody,
        muscles: &[
            (MuscleGroup::Forearms, 1.0),
            (MuscleGroup::Traps, 0.5),
            (MuscleGroup::Core, 0.5),
            (MuscleGroup::Quads, 0.2),
            (MuscleGroup::Hamstrings, 0.2),
            (MuscleGroup::Glutes, 0.2),
            (MuscleGroup::UpperBack, 0.1),
            (MuscleGroup::LowerBack, 0.1),
        ],
        stimulus_fatigue_ratio: 1.8,
    },
];
