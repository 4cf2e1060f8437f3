use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::{ResponseEnvelope, Transport, TransportError};
use crate::error::{Error, Result};

/// Host serving the public API.
pub const PRODUCTION_HOST: &str = "https://api.telegram.org";

/// Resolves the URL a method call is sent to.
pub trait UrlResolver: Send + Sync {
    fn resolve(&self, token: &str, method: &str) -> String;
}

impl<F> UrlResolver for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn resolve(&self, token: &str, method: &str) -> String {
        self(token, method)
    }
}

/// Where requests go: the production host, its test environment, or a
/// caller-supplied resolver from (token, method) to URL.
#[derive(Clone)]
pub enum ApiEndpoint {
    Production,
    Test,
    Resolver(Arc<dyn UrlResolver>),
}

impl ApiEndpoint {
    /// Standard path layout rooted at a custom host.
    ///
    /// Primarily for pointing a client at a local mock server in tests.
    pub fn at_root(root: impl Into<String>) -> Self {
        let root: String = root.into();
        let root = root.trim_end_matches('/').to_string();
        ApiEndpoint::Resolver(Arc::new(move |token: &str, method: &str| {
            format!("{root}/bot{token}/{method}")
        }))
    }

    fn resolve(&self, token: &str, method: &str) -> String {
        match self {
            ApiEndpoint::Production => format!("{PRODUCTION_HOST}/bot{token}/{method}"),
            ApiEndpoint::Test => format!("{PRODUCTION_HOST}/bot{token}/test/{method}"),
            ApiEndpoint::Resolver(resolver) => resolver.resolve(token, method),
        }
    }
}

impl fmt::Debug for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiEndpoint::Production => f.write_str("ApiEndpoint::Production"),
            ApiEndpoint::Test => f.write_str("ApiEndpoint::Test"),
            ApiEndpoint::Resolver(_) => f.write_str("ApiEndpoint::Resolver(..)"),
        }
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        ApiEndpoint::Production
    }
}

/// Production transport: one reqwest POST per call.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: ApiEndpoint,
    token: String,
}

impl HttpTransport {
    /// Build a transport for `token` against `endpoint`.
    ///
    /// Timeout knobs are env-overridable:
    /// - `BOTWIRE_HTTP_TIMEOUT_SECS` (default 60; must stay above the
    ///   long-poll wait or every idle poll times out client-side)
    /// - `BOTWIRE_HTTP_CONNECT_TIMEOUT_SECS` (default 10)
    pub fn new(token: impl Into<String>, endpoint: ApiEndpoint) -> Result<Self> {
        let timeout_secs = env::var("BOTWIRE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);
        let connect_timeout_secs = env::var("BOTWIRE_HTTP_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(10);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            token: token.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> std::result::Result<ResponseEnvelope, TransportError> {
        // Request URLs embed the credential: log the method name, never the URL.
        let url = self.endpoint.resolve(&self.token, method);
        let client_request_id = Uuid::new_v4().to_string();
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("x-client-request-id", &client_request_id)
            .json(&params)
            .send()
            .await?;

        // Failure envelopes ride on non-2xx statuses; the body decides, not
        // the status line.
        let http_status = response.status().as_u16();
        let body: serde_json::Value = response.json().await?;
        let envelope = ResponseEnvelope::from_json(body)?;

        debug!(
            method,
            http_status,
            client_request_id = client_request_id.as_str(),
            duration_ms = started.elapsed().as_millis() as u64,
            "bot api round trip"
        );

        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_and_test_environments_share_the_host() {
        let token = "123:abc";
        assert_eq!(
            ApiEndpoint::Production.resolve(token, "getMe"),
            "https://api.telegram.org/bot123:abc/getMe"
        );
        assert_eq!(
            ApiEndpoint::Test.resolve(token, "getMe"),
            "https://api.telegram.org/bot123:abc/test/getMe"
        );
    }

    #[test]
    fn custom_root_keeps_the_path_layout() {
        let endpoint = ApiEndpoint::at_root("http://127.0.0.1:9000/");
        assert_eq!(
            endpoint.resolve("123:abc", "sendMessage"),
            "http://127.0.0.1:9000/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn resolver_closures_take_precedence_over_layout() {
        let endpoint = ApiEndpoint::Resolver(Arc::new(|_token: &str, method: &str| {
            format!("http://gateway.internal/rpc/{method}")
        }));
        assert_eq!(
            endpoint.resolve("123:abc", "getMe"),
            "http://gateway.internal/rpc/getMe"
        );
    }
}

