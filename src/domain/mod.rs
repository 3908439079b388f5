//! Domain layer: the message record, its field schema, and the validation
//! and encoding engine (no I/O).

mod encode;
mod message;
mod schema;
mod validation;
mod value;

pub use encode::{EncodedForm, validate_and_encode};
pub use message::Message;
pub use schema::{
    Constraint, Dependency, FieldKind, FieldSpec, MESSAGE_FIELDS, NumericField, Requiredness,
};
pub use validation::ValidationError;
pub use value::ApiToken;
