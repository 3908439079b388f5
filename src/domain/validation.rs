use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidToken { expected_len: usize },
    BlankRequiredField { field: &'static str },
    MessageFormat { field: &'static str, min: usize, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { expected_len } => {
                write!(
                    f,
                    "api token must be exactly {expected_len} printable ASCII characters"
                )
            }
            Self::BlankRequiredField { field } => write!(f, "{field} must not be blank"),
            Self::MessageFormat { field, min, max } => {
                write!(
                    f,
                    "{field} must be printable ASCII with length in {min}..={max}"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Length of `value` counted in printable ASCII characters.
///
/// Returns `None` when any character falls outside 0x20..=0x7E, which covers
/// control characters, DEL, and every non-ASCII byte. Space is printable and
/// counts.
pub(crate) fn printable_ascii_len(value: &str) -> Option<usize> {
    if value.bytes().all(|byte| matches!(byte, 0x20..=0x7E)) {
        Some(value.len())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, printable_ascii_len};

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::InvalidToken { expected_len: 30 };
        assert_eq!(
            err.to_string(),
            "api token must be exactly 30 printable ASCII characters"
        );

        let err = ValidationError::BlankRequiredField { field: "user" };
        assert_eq!(err.to_string(), "user must not be blank");

        let err = ValidationError::MessageFormat {
            field: "message",
            min: 1,
            max: 1024,
        };
        assert_eq!(
            err.to_string(),
            "message must be printable ASCII with length in 1..=1024"
        );
    }

    #[test]
    fn printable_ascii_len_counts_printable_characters() {
        assert_eq!(printable_ascii_len(""), Some(0));
        assert_eq!(printable_ascii_len("hello"), Some(5));
        assert_eq!(printable_ascii_len("with space"), Some(10));
        assert_eq!(printable_ascii_len("!~"), Some(2));
    }

    #[test]
    fn printable_ascii_len_rejects_control_and_non_ascii() {
        assert_eq!(printable_ascii_len("line\nbreak"), None);
        assert_eq!(printable_ascii_len("tab\there"), None);
        assert_eq!(printable_ascii_len("\x7f"), None);
        assert_eq!(printable_ascii_len("héllo"), None);
        assert_eq!(printable_ascii_len("日本語"), None);
    }
}
