use chrono::{DateTime, TimeDelta, Utc};

/// Seconds a message is shown before it disappears.
pub const MESSAGE_DURATION: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A transient notification about the outcome of a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMessage {
    pub kind: MessageKind,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl AppMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Success, text.into())
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text.into())
    }

    fn new(kind: MessageKind, text: String) -> Self {
        Self {
            kind,
            text,
            created: Utc::now(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created >= TimeDelta::seconds(MESSAGE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_constructors() {
        let success = AppMessage::success("Routine deleted successfully!");
        let error = AppMessage::error(String::from("Failed to save routine"));

        assert_eq!(success.kind, MessageKind::Success);
        assert_eq!(success.text, "Routine deleted successfully!");
        assert!(!success.is_error());
        assert_eq!(error.kind, MessageKind::Error);
        assert!(error.is_error());
    }

    #[rstest]
    #[case(0, false)]
    #[case(3_999, false)]
    #[case(4_000, true)]
    #[case(60_000, true)]
    fn test_is_expired(#[case] elapsed_ms: i64, #[case] expected: bool) {
        let message = AppMessage::success("Exercise copied successfully!");
        assert_eq!(
            message.is_expired(message.created + TimeDelta::milliseconds(elapsed_ms)),
            expected
        );
    }
}
