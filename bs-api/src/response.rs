//! Response decoding.
//!
//! List endpoints answer with an envelope:
//! ```json
//! { "data": [ ... ], "total": 2 }
//! ```
//! and failures with `{ "error": { "code": 404, "message": "..." } }`.
//! Single-resource endpoints return the bare object.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use bs_core::error::{BsError, BsResult};

/// `{data, total, error}` wrapper used by list responses and API failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Raw payload, decoded later into the caller's sequence type.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Total number of matching records on the server.
    #[serde(default)]
    pub total: i64,
    /// Error details (present only on failures).
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

/// Error detail inside an envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl Envelope {
    /// The API error, if the envelope carries a non-zero code or a message.
    pub fn error(&self) -> Option<BsError> {
        match &self.error {
            Some(e) if e.code != 0 || !e.message.is_empty() => Some(BsError::Api {
                code: e.code,
                message: e.message.clone(),
            }),
            _ => None,
        }
    }
}

/// A decoded list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
}

/// Decode a bare resource object.
///
/// A body that does not decode yields `T::default()` rather than an error,
/// so an empty record and a malformed payload look the same to the caller.
pub fn parse_single<T: DeserializeOwned + Default>(raw: &[u8]) -> BsResult<T> {
    match serde_json::from_slice(raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!("discarding undecodable {} payload: {e}", std::any::type_name::<T>());
            Ok(T::default())
        }
    }
}

/// Decode a list envelope, failing on an API error or a malformed payload.
pub fn parse_list<T: DeserializeOwned>(raw: &[u8]) -> BsResult<ListResponse<T>> {
    let envelope: Envelope = serde_json::from_slice(raw)
        .map_err(|e| BsError::Decode(format!("invalid response envelope: {e}")))?;

    if let Some(err) = envelope.error() {
        return Err(err);
    }

    let data: Vec<T> = serde_json::from_value(envelope.data)
        .map_err(|e| BsError::Decode(format!("invalid list payload: {e}")))?;

    Ok(ListResponse {
        data,
        total: envelope.total,
    })
}

/// Decode a list envelope and keep only the records.
pub fn parse_multiple<T: DeserializeOwned>(raw: &[u8]) -> BsResult<Vec<T>> {
    parse_list(raw).map(|list| list.data)
}

/// Decode a failure body into the matching error.
///
/// `status` is used when the envelope decodes but carries no error details.
pub fn parse_failure(status: u16, raw: &[u8]) -> BsError {
    let envelope: Envelope = match serde_json::from_slice(raw) {
        Ok(envelope) => envelope,
        Err(e) => return BsError::Decode(format!("invalid error response (status {status}): {e}")),
    };

    envelope.error().unwrap_or_else(|| BsError::Api {
        code: i64::from(status),
        message: format!("unexpected status {status}"),
    })
}
