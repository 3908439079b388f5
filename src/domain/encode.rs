use crate::domain::message::Message;
use crate::domain::schema::{Constraint, FieldKind, MESSAGE_FIELDS, Requiredness};
use crate::domain::validation::{ValidationError, printable_ascii_len};
use crate::domain::value::ApiToken;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered, wire-ready (name, value) pairs for one send.
///
/// Built by [`validate_and_encode`]; the token pair always comes first and
/// message fields follow in [`MESSAGE_FIELDS`] order.
pub struct EncodedForm {
    pairs: Vec<(&'static str, String)>,
}

impl EncodedForm {
    /// Borrow the pairs in wire order.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Consume the form into its pairs.
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Number of pairs, token included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the form carries no pairs at all.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Validate `message` against [`MESSAGE_FIELDS`] and build its form.
///
/// Checks run in passes over the schema table, each in table order, and the
/// first failing field decides the error: required fields must be non-empty
/// ([`ValidationError::BlankRequiredField`]), then length-constrained fields
/// must be printable ASCII within their range
/// ([`ValidationError::MessageFormat`]). Bounded numeric fields never fail;
/// they are clamped into range instead. Dependencies are evaluated against
/// the clamped values, so an out-of-range `priority` that clamps to 2 does
/// activate `retry` and `expire`.
///
/// The caller's message is never modified; clamping happens on a private
/// copy. Fields whose dependency is unmet, and text fields that are unset,
/// stay off the wire.
pub fn validate_and_encode(
    message: &Message,
    token: &ApiToken,
) -> Result<EncodedForm, ValidationError> {
    check_required(message)?;
    check_length_ranges(message)?;
    let clamped = clamp_bounded(message);

    let mut pairs = Vec::with_capacity(MESSAGE_FIELDS.len() + 1);
    pairs.push((ApiToken::FIELD, token.as_str().to_owned()));

    for spec in &MESSAGE_FIELDS {
        if !spec.dependency.holds(&clamped) {
            continue;
        }
        match spec.kind {
            FieldKind::Text(get) => {
                let value = get(&clamped);
                if !value.is_empty() {
                    pairs.push((spec.name, value.to_owned()));
                }
            }
            FieldKind::Timestamp(access)
            | FieldKind::SignedSmallInt(access)
            | FieldKind::UnsignedSize(access) => {
                pairs.push((spec.name, (access.get)(&clamped).to_string()));
            }
        }
    }

    Ok(EncodedForm { pairs })
}

fn check_required(message: &Message) -> Result<(), ValidationError> {
    for spec in &MESSAGE_FIELDS {
        if spec.required != Requiredness::Required {
            continue;
        }
        // Numeric slots always hold a value; only text can be blank.
        if let FieldKind::Text(get) = spec.kind {
            if get(message).is_empty() {
                return Err(ValidationError::BlankRequiredField { field: spec.name });
            }
        }
    }
    Ok(())
}

fn check_length_ranges(message: &Message) -> Result<(), ValidationError> {
    for spec in &MESSAGE_FIELDS {
        let Constraint::LengthRange { min, max } = spec.constraint else {
            continue;
        };
        let FieldKind::Text(get) = spec.kind else {
            continue;
        };
        let value = get(message);
        if value.is_empty() {
            // Unset fields have length 0 and nothing left to check; blank
            // required fields were already rejected.
            continue;
        }
        match printable_ascii_len(value) {
            Some(len) if (min..=max).contains(&len) => {}
            _ => {
                return Err(ValidationError::MessageFormat {
                    field: spec.name,
                    min,
                    max,
                });
            }
        }
    }
    Ok(())
}

fn clamp_bounded(message: &Message) -> Message {
    let mut clamped = message.clone();
    for spec in &MESSAGE_FIELDS {
        let Constraint::Bounded { min, max } = spec.constraint else {
            continue;
        };
        let access = match spec.kind {
            FieldKind::Timestamp(access)
            | FieldKind::SignedSmallInt(access)
            | FieldKind::UnsignedSize(access) => access,
            FieldKind::Text(_) => continue,
        };
        let value = (access.get)(&clamped).clamp(min, max);
        (access.set)(&mut clamped, value);
    }
    clamped
}
