//! Transport layer: one HTTP round trip per call.
//!
//! [`Transport`] is the seam the dispatch layer talks through, so call
//! decoding and the polling loop are testable without real network I/O.
//! [`HttpTransport`] is the production implementation. This layer never
//! retries and never surfaces an unwrapped error: everything that happens
//! before a well-formed [`ResponseEnvelope`] exists becomes a
//! [`TransportError`].

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::error::ApiError;
use crate::types::ResponseParameters;

pub mod http;

pub use http::{ApiEndpoint, HttpTransport, UrlResolver};

/// One request/response round trip against the API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Serialize `params` as the JSON body of a POST to `method`'s endpoint
    /// and parse the response body into an envelope.
    async fn send_request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<ResponseEnvelope, TransportError>;
}

/// The `{ok: ...}` wrapper every API response carries.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    Success { result: serde_json::Value },
    Failure(ApiError),
}

/// Failure to obtain any well-formed envelope.
///
/// Always treated as transient by the polling loop; never produced for a
/// call the server explicitly rejected (that is [`ApiError`]).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failure, timeout, or a body that is not JSON.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request parameters could not be serialized.
    #[error("request serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The body parsed as JSON but is not a valid response envelope.
    #[error("malformed response envelope: {0}")]
    Envelope(String),

    /// A success result did not match the method's typed output shape.
    /// The typed shape is a compile-time contract with the method registry,
    /// not something validated by the server.
    #[error("result of {method} did not match its typed shape: {message}")]
    Decode { method: String, message: String },
}

#[derive(Deserialize)]
struct RawEnvelope {
    ok: bool,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error_code: Option<i32>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    parameters: Option<ResponseParameters>,
}

impl ResponseEnvelope {
    /// Interpret a parsed JSON body as an envelope.
    pub fn from_json(value: serde_json::Value) -> Result<Self, TransportError> {
        let raw: RawEnvelope = serde_json::from_value(value)
            .map_err(|e| TransportError::Envelope(e.to_string()))?;
        if raw.ok {
            Ok(ResponseEnvelope::Success {
                result: raw.result.unwrap_or(serde_json::Value::Null),
            })
        } else {
            match (raw.error_code, raw.description) {
                (Some(code), Some(description)) => Ok(ResponseEnvelope::Failure(ApiError {
                    code,
                    description,
                    parameters: raw.parameters,
                })),
                _ => Err(TransportError::Envelope(
                    "failure envelope missing error_code or description".to_string(),
                )),
            }
        }
    }
}
