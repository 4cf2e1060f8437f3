use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::client::builder::BotClientBuilder;
use crate::error::{Error, Result};
use crate::methods::Method;
use crate::transport::{ResponseEnvelope, Transport, TransportError};

/// Typed client for the Bot API.
///
/// Every method goes through the single generic [`call`](Self::call) path;
/// the [`Method`] implementation at the call site supplies the wire name and
/// both type shapes. This layer decodes and classifies - it never retries.
#[derive(Clone)]
pub struct BotClient {
    transport: Arc<dyn Transport>,
}

impl BotClient {
    /// Client for `token` against the production endpoint.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        BotClientBuilder::new().token(token).build()
    }

    pub fn builder() -> BotClientBuilder {
        BotClientBuilder::new()
    }

    /// Client over an externally built transport.
    ///
    /// The seam tests use to script server behavior without network I/O.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Invoke one API method.
    ///
    /// A `Success` envelope resolves with the result decoded into
    /// `M::Output`, untouched otherwise; a `Failure` envelope fails with the
    /// [`ApiError`](crate::ApiError) it carried. Whether the result actually
    /// has the shape `M::Output` promises is a contract with the method
    /// registry, not something checked by the server.
    pub async fn call<M: Method>(&self, method: &M) -> Result<M::Output> {
        let params = serde_json::to_value(method)
            .map_err(|e| Error::Transport(TransportError::Serialize(e)))?;

        let started = Instant::now();
        let envelope = self.transport.send_request(M::NAME, params).await?;

        match envelope {
            ResponseEnvelope::Success { result } => {
                serde_json::from_value(result).map_err(|e| {
                    Error::Transport(TransportError::Decode {
                        method: M::NAME.to_string(),
                        message: e.to_string(),
                    })
                })
            }
            ResponseEnvelope::Failure(api_error) => {
                info!(
                    method = M::NAME,
                    error_code = api_error.code,
                    description = api_error.description.as_str(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "bot api call rejected"
                );
                Err(Error::Api(api_error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::methods::GetMe;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedTransport(ResponseEnvelope);

    #[async_trait]
    impl Transport for FixedTransport {
        async fn send_request(
            &self,
            _method: &str,
            _params: serde_json::Value,
        ) -> std::result::Result<ResponseEnvelope, TransportError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn success_result_decodes_into_typed_output() {
        let client = BotClient::with_transport(Arc::new(FixedTransport(
            ResponseEnvelope::Success {
                result: json!({"id": 1, "is_bot": true, "first_name": "bot"}),
            },
        )));
        let me = client.call(&GetMe {}).await.unwrap();
        assert_eq!(me.id, 1);
        assert!(me.is_bot);
    }

    #[tokio::test]
    async fn failure_envelope_surfaces_as_api_error() {
        let client = BotClient::with_transport(Arc::new(FixedTransport(
            ResponseEnvelope::Failure(ApiError {
                code: 400,
                description: "Bad Request: chat not found".to_string(),
                parameters: None,
            }),
        )));
        match client.call(&GetMe {}).await {
            Err(Error::Api(err)) => {
                assert_eq!(err.code, 400);
                assert_eq!(err.description, "Bad Request: chat not found");
            }
            other => unreachable!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn mismatched_result_shape_is_a_decode_error() {
        let client = BotClient::with_transport(Arc::new(FixedTransport(
            ResponseEnvelope::Success {
                result: json!("not a user object"),
            },
        )));
        match client.call(&GetMe {}).await {
            Err(Error::Transport(TransportError::Decode { method, .. })) => {
                assert_eq!(method, "getMe");
            }
            other => unreachable!("expected decode error, got {other:?}"),
        }
    }
}
