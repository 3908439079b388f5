use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// The slice of the response body the delivery decision rests on.
///
/// The API reports acceptance through the `status` sentinel; every other
/// key (`request`, `errors`, ...) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    pub status: i64,
}

pub fn decode_status_json_response(json: &str) -> Result<StatusResponse, TransportError> {
    let parsed: StatusResponse = serde_json::from_str(json)?;
    Ok(parsed)
}
