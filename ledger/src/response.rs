//! Wire payloads for query responses.

use serde::Serialize;

use crate::error::LedgerError;

/// Successful query payload: `{"Name": key, "List"|"Amount": value}`.
///
/// Exactly one of `list` and `amount` is set, matching the shape of the
/// queried key.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "List", skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl QueryResponse {
    pub fn list(name: String, value: String) -> Self {
        Self {
            name,
            list: Some(value),
            amount: None,
        }
    }

    pub fn amount(name: String, value: String) -> Self {
        Self {
            name,
            list: None,
            amount: Some(value),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    #[serde(rename = "Error")]
    error: String,
}

/// Render an error as the `{"Error": message}` payload the dispatcher
/// returns to callers.
pub fn error_payload(err: &LedgerError) -> Vec<u8> {
    // A single string field cannot fail to serialize.
    serde_json::to_vec(&ErrorResponse {
        error: err.to_string(),
    })
    .unwrap_or_default()
}
