use crate::domain::validation::{ValidationError, printable_ascii_len};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Pushover application API token.
///
/// Invariant: exactly [`ApiToken::LEN`] printable ASCII characters. The value
/// is kept verbatim; a leading or trailing space is printable and counts.
pub struct ApiToken(String);

impl ApiToken {
    /// Form field name used by Pushover (`token`).
    pub const FIELD: &'static str = "token";

    /// Required token length.
    pub const LEN: usize = 30;

    /// Create a validated [`ApiToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if printable_ascii_len(&value) != Some(Self::LEN) {
            return Err(ValidationError::InvalidToken {
                expected_len: Self::LEN,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_token_accepts_full_length_printable_ascii() {
        let token = ApiToken::new("azGDORePK8gMaC0QOYAMyEEuzJnyUi").unwrap();
        assert_eq!(token.as_str(), "azGDORePK8gMaC0QOYAMyEEuzJnyUi");

        let spaced = format!("spaced{}", " ".repeat(ApiToken::LEN - 6));
        assert_eq!(ApiToken::new(spaced.clone()).unwrap().as_str(), spaced);
    }

    #[test]
    fn api_token_rejects_wrong_length() {
        assert!(ApiToken::new("").is_err());
        assert!(ApiToken::new("a".repeat(ApiToken::LEN - 1)).is_err());
        assert!(ApiToken::new("a".repeat(ApiToken::LEN + 1)).is_err());
    }

    #[test]
    fn api_token_rejects_non_printable_characters() {
        let with_newline = format!("{}\n", "a".repeat(ApiToken::LEN - 1));
        assert!(matches!(
            ApiToken::new(with_newline),
            Err(ValidationError::InvalidToken { expected_len: 30 })
        ));

        let non_ascii = "б".repeat(ApiToken::LEN);
        assert!(ApiToken::new(non_ascii).is_err());
    }
}
