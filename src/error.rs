use thiserror::Error;

use crate::transport::TransportError;
use crate::types::ResponseParameters;

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the crate.
///
/// Exactly one of `Api` or `Transport` is produced per call: a call either
/// reached the server and was explicitly rejected (`Api`), or never yielded a
/// well-formed response envelope at all (`Transport`).
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a failure envelope.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// No well-formed envelope was obtained (connection failure, timeout,
    /// non-JSON body, result shape mismatch).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Client-side configuration problem (bad token, invalid endpoint URL).
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

/// A well-formed rejection from the server.
///
/// Mirrors the failure envelope: numeric code, human-readable description and
/// the optional `parameters` object some rejections carry (flood-wait hints,
/// group-migration notices).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {description}")]
pub struct ApiError {
    pub code: i32,
    pub description: String,
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    /// Whether a consumer loop may retry the call that produced this error.
    ///
    /// Server-side failures (>= 500) are retryable, as is everything except
    /// the credential/permission/existence codes 401, 403 and 404 - those
    /// cannot be fixed by waiting.
    pub fn is_retryable(&self) -> bool {
        self.code >= 500 || !matches!(self.code, 401 | 403 | 404)
    }

    /// Server-requested wait before retrying, if the failure carried one.
    pub fn retry_after(&self) -> Option<std::time::Duration> {
        let secs = self.parameters.as_ref()?.retry_after?;
        u64::try_from(secs).ok().map(std::time::Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(code: i32) -> ApiError {
        ApiError {
            code,
            description: "test".to_string(),
            parameters: None,
        }
    }

    #[test]
    fn server_side_codes_are_retryable() {
        for code in [500, 502, 503, 504, 521] {
            assert!(api_error(code).is_retryable(), "code {code} should retry");
        }
    }

    #[test]
    fn credential_codes_are_fatal() {
        for code in [401, 403, 404] {
            assert!(!api_error(code).is_retryable(), "code {code} must be fatal");
        }
    }

    #[test]
    fn other_client_codes_are_retryable() {
        // 429 (flood wait) and 409 (conflicting poller) resolve on their own.
        for code in [400, 409, 420, 429] {
            assert!(api_error(code).is_retryable(), "code {code} should retry");
        }
    }

    #[test]
    fn retry_after_surfaces_server_hint() {
        let err = ApiError {
            code: 429,
            description: "Too Many Requests: retry after 7".to_string(),
            parameters: Some(ResponseParameters {
                retry_after: Some(7),
                migrate_to_chat_id: None,
            }),
        };
        assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(7)));
        assert_eq!(api_error(429).retry_after(), None);
    }
}
