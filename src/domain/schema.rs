use crate::domain::message::Message;

#[derive(Debug, Clone, Copy)]
/// Typed access to one numeric slot of a [`Message`].
///
/// All numeric slots travel through `i64`: getters widen (the `u64` slots
/// saturate, which is unreachable in practice since every bound fits), and
/// setters narrow back into the slot's own type. Setters are only invoked
/// with values already clamped to the field's bounds.
pub struct NumericField {
    pub get: fn(&Message) -> i64,
    pub set: fn(&mut Message, i64),
}

#[derive(Debug, Clone, Copy)]
/// How a field value is read from a [`Message`] and rendered on the wire.
///
/// The kind carries the accessor into the message record, so the schema table
/// below is the only place that names a field twice (once for the wire, once
/// for the slot).
pub enum FieldKind {
    /// Printable-ASCII text copied to the wire verbatim. An empty value
    /// means "not set" and is left off the wire.
    Text(fn(&Message) -> &str),
    /// Unix timestamp in seconds, rendered in decimal with its sign.
    Timestamp(NumericField),
    /// Small signed integer, rendered in decimal with its sign.
    SignedSmallInt(NumericField),
    /// Unsigned size value, rendered in decimal.
    UnsignedSize(NumericField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whether a field must be present for a message to be sendable.
pub enum Requiredness {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-field rule applied to the field's own value.
pub enum Constraint {
    /// Printable-ASCII length must lie in `min..=max`; violations reject the
    /// whole message.
    LengthRange { min: usize, max: usize },
    /// Numeric value is clamped into `min..=max` before encoding; never
    /// rejects.
    Bounded { min: i64, max: i64 },
    /// No constraint.
    None,
}

#[derive(Debug, Clone, Copy)]
/// Rule over the whole message deciding whether a field goes on the wire.
///
/// The referenced field is captured as an accessor function, so renaming a
/// slot breaks the table at compile time instead of silently decoupling it.
pub enum Dependency {
    /// Always eligible.
    None,
    /// Eligible only while the referenced text field is non-empty.
    NonEmpty(fn(&Message) -> &str),
    /// Eligible only while the referenced numeric field is nonzero.
    NonZero(fn(&Message) -> i64),
    /// Eligible only while the referenced numeric field equals `value`.
    Equals { field: fn(&Message) -> i64, value: i64 },
}

impl Dependency {
    /// Whether the owning field should be included for `message`.
    pub fn holds(&self, message: &Message) -> bool {
        match self {
            Self::None => true,
            Self::NonEmpty(field) => !field(message).is_empty(),
            Self::NonZero(field) => field(message) != 0,
            Self::Equals { field, value } => field(message) == *value,
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// One row of the message schema: wire name, kind, requiredness, constraint,
/// and dependency.
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: Requiredness,
    pub constraint: Constraint,
    pub dependency: Dependency,
}

/// The message schema, in wire order.
///
/// This table is the single source of truth for the messages API fields:
/// validation, clamping, dependency gating, and form encoding are all driven
/// by iterating it. Table order is encoding order and decides which failing
/// field gets reported first.
pub const MESSAGE_FIELDS: [FieldSpec; 11] = [
    FieldSpec {
        name: "user",
        kind: FieldKind::Text(|m| &m.user),
        required: Requiredness::Required,
        constraint: Constraint::LengthRange { min: 30, max: 30 },
        dependency: Dependency::None,
    },
    FieldSpec {
        name: "message",
        kind: FieldKind::Text(|m| &m.message),
        required: Requiredness::Required,
        constraint: Constraint::LengthRange { min: 1, max: 1024 },
        dependency: Dependency::None,
    },
    FieldSpec {
        name: "title",
        kind: FieldKind::Text(|m| &m.title),
        required: Requiredness::Optional,
        constraint: Constraint::LengthRange { min: 0, max: 250 },
        dependency: Dependency::None,
    },
    FieldSpec {
        name: "device",
        kind: FieldKind::Text(|m| &m.device),
        required: Requiredness::Optional,
        constraint: Constraint::LengthRange { min: 0, max: 25 },
        dependency: Dependency::None,
    },
    FieldSpec {
        name: "url",
        kind: FieldKind::Text(|m| &m.url),
        required: Requiredness::Optional,
        constraint: Constraint::LengthRange { min: 0, max: 512 },
        dependency: Dependency::None,
    },
    FieldSpec {
        name: "url_title",
        kind: FieldKind::Text(|m| &m.url_title),
        required: Requiredness::Optional,
        constraint: Constraint::LengthRange { min: 0, max: 100 },
        dependency: Dependency::NonEmpty(|m| &m.url),
    },
    FieldSpec {
        name: "time",
        kind: FieldKind::Timestamp(NumericField {
            get: |m| m.time,
            set: |m, v| m.time = v,
        }),
        required: Requiredness::Optional,
        constraint: Constraint::None,
        dependency: Dependency::NonZero(|m| m.time),
    },
    FieldSpec {
        name: "sound",
        kind: FieldKind::Text(|m| &m.sound),
        required: Requiredness::Optional,
        constraint: Constraint::LengthRange { min: 0, max: 16 },
        dependency: Dependency::None,
    },
    FieldSpec {
        name: "priority",
        kind: FieldKind::SignedSmallInt(NumericField {
            get: |m| i64::from(m.priority),
            set: |m, v| m.priority = v as i8,
        }),
        required: Requiredness::Optional,
        constraint: Constraint::Bounded { min: -2, max: 2 },
        dependency: Dependency::None,
    },
    FieldSpec {
        name: "retry",
        kind: FieldKind::UnsignedSize(NumericField {
            get: |m| i64::try_from(m.retry).unwrap_or(i64::MAX),
            set: |m, v| m.retry = v as u64,
        }),
        required: Requiredness::Optional,
        constraint: Constraint::Bounded { min: 30, max: 86_400 },
        dependency: Dependency::Equals {
            field: |m| i64::from(m.priority),
            value: 2,
        },
    },
    FieldSpec {
        name: "expire",
        kind: FieldKind::UnsignedSize(NumericField {
            get: |m| i64::try_from(m.expire).unwrap_or(i64::MAX),
            set: |m, v| m.expire = v as u64,
        }),
        required: Requiredness::Optional,
        constraint: Constraint::Bounded { min: 30, max: 86_400 },
        dependency: Dependency::Equals {
            field: |m| i64::from(m.priority),
            value: 2,
        },
    },
];
