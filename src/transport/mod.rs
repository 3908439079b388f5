//! Transport layer: wire-format details (response deserialization).

mod status;

pub use status::{StatusResponse, TransportError, decode_status_json_response};
