use derive_more::{AsRef, Display};

const MAX_LEN: usize = 80;

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Wraps a name known to be valid at compile time.
    pub(crate) fn literal(name: &'static str) -> Self {
        debug_assert!(Name::new(name).is_ok_and(|n| n.0 == name));
        Name(name.to_string())
    }

    /// Names are unique regardless of letter case.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }

    /// Appends the suffix, shortening the base so the result stays within the length limit.
    pub fn with_suffix(&self, suffix: &str) -> Result<Self, NameError> {
        let suffix = suffix.trim();
        let room = MAX_LEN.saturating_sub(suffix.chars().count() + 1);
        let base = self.0.chars().take(room).collect::<String>();
        Name::new(&format!("{} {suffix}", base.trim_end()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 80 characters or fewer ({0} > 80)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Push A", Ok(Name("Push A".to_string())))]
    #[case("  Micro Cycle 1  ", Ok(Name("Micro Cycle 1".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    #[case(&"A".repeat(81), Err(NameError::TooLong(81)))]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[rstest]
    #[case("Squat", true)]
    #[case("squat", true)]
    #[case(" SQUAT ", true)]
    #[case("Front Squat", false)]
    fn test_name_matches(#[case] other: &str, #[case] expected: bool) {
        assert_eq!(Name::new("Squat").unwrap().matches(other), expected);
    }

    #[rstest]
    #[case("Push A", "Push A (Copy)")]
    #[case(&"A".repeat(73), &format!("{} (Copy)", "A".repeat(73)))]
    #[case(&"A".repeat(74), &format!("{} (Copy)", "A".repeat(73)))]
    #[case(&"A".repeat(80), &format!("{} (Copy)", "A".repeat(73)))]
    #[case(&format!("{} B", "A".repeat(72)), &format!("{} (Copy)", "A".repeat(72)))]
    #[case(&"Ü".repeat(80), &format!("{} (Copy)", "Ü".repeat(73)))]
    fn test_name_with_suffix(#[case] name: &str, #[case] expected: &str) {
        let copy = Name::new(name).unwrap().with_suffix("(Copy)").unwrap();
        assert_eq!(copy.0, expected);
        assert!(copy.0.chars().count() <= MAX_LEN);
    }
}
