use std::{fmt, slice::Iter};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    FrontDelts,
    SideDelts,
    RearDelts,
    Biceps,
    Triceps,
    Forearms,
    Traps,
    UpperBack,
    LowerBack,
    Core,
    Glutes,
    Quads,
    Hamstrings,
    Calves,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLES: [MuscleGroup; 15] = [
            MuscleGroup::Chest,
            MuscleGroup::FrontDelts,
            MuscleGroup::SideDelts,
            MuscleGroup::RearDelts,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Traps,
            MuscleGroup::UpperBack,
            MuscleGroup::LowerBack,
            MuscleGroup::Core,
            MuscleGroup::Glutes,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::FrontDelts => "Front Delts",
            MuscleGroup::SideDelts => "Side Delts",
            MuscleGroup::RearDelts => "Rear Delts",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Traps => "Traps",
            MuscleGroup::UpperBack => "Upper Back",
            MuscleGroup::LowerBack => "Lower Back",
            MuscleGroup::Core => "Core",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Calves => "Calves",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|m| m.name() == value)
            .copied()
            .ok_or_else(|| MuscleGroupError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MuscleGroupError {
    #[error("Unknown muscle group: {0}")]
    Unknown(String),
}

/// Groupings offered for quickly selecting muscles in the timeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MusclePreset {
    Torso,
    Limbs,
    Legs,
}

impl MusclePreset {
    #[must_use]
    pub fn muscles(self) -> &'static [MuscleGroup] {
        match self {
            MusclePreset::Torso => &[
                MuscleGroup::Chest,
                MuscleGroup::Traps,
                MuscleGroup::UpperBack,
                MuscleGroup::LowerBack,
                MuscleGroup::Core,
            ],
            MusclePreset::Limbs => &[
                MuscleGroup::FrontDelts,
                MuscleGroup::SideDelts,
                MuscleGroup::RearDelts,
                MuscleGroup::Biceps,
                MuscleGroup::Triceps,
                MuscleGroup::Forearms,
            ],
            MusclePreset::Legs => &[
                MuscleGroup::Glutes,
                MuscleGroup::Quads,
                MuscleGroup::Hamstrings,
                MuscleGroup::Calves,
            ],
        }
    }
}

impl Property for MusclePreset {
    fn iter() -> Iter<'static, MusclePreset> {
        static PRESETS: [MusclePreset; 3] =
            [MusclePreset::Torso, MusclePreset::Limbs, MusclePreset::Legs];
        PRESETS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MusclePreset::Torso => "Torso",
            MusclePreset::Limbs => "Limbs",
            MusclePreset::Legs => "Legs",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_muscle_group_order() {
        assert_eq!(
            MuscleGroup::iter().map(|m| m.name()).collect::<Vec<_>>(),
            vec![
                "Chest",
                "Front Delts",
                "Side Delts",
                "Rear Delts",
                "Biceps",
                "Triceps",
                "Forearms",
                "Traps",
                "Upper Back",
                "Lower Back",
                "Core",
                "Glutes",
                "Quads",
                "Hamstrings",
                "Calves",
            ]
        );
        assert!(MuscleGroup::iter().is_sorted());
    }

    #[rstest]
    #[case("Chest", Ok(MuscleGroup::Chest))]
    #[case("Upper Back", Ok(MuscleGroup::UpperBack))]
    #[case("upper back", Err(MuscleGroupError::Unknown("upper back".to_string())))]
    #[case("Lats", Err(MuscleGroupError::Unknown("Lats".to_string())))]
    fn test_muscle_group_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<MuscleGroup, MuscleGroupError>,
    ) {
        assert_eq!(MuscleGroup::try_from(value), expected);
    }

    #[test]
    fn test_muscle_presets_partition_muscles() {
        let muscles = MusclePreset::iter()
            .flat_map(|p| p.muscles().iter().copied())
            .collect::<Vec<_>>();
        assert_eq!(muscles.len(), MuscleGroup::iter().len());
        assert_eq!(
            muscles.into_iter().collect::<BTreeSet<_>>(),
            MuscleGroup::iter().copied().collect::<BTreeSet<_>>()
        );
    }
}
