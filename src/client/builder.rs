use std::sync::Arc;

use url::Url;

use crate::client::core::BotClient;
use crate::error::{Error, Result};
use crate::transport::{ApiEndpoint, HttpTransport};

/// Builder for [`BotClient`] with custom configuration.
pub struct BotClientBuilder {
    token: Option<String>,
    endpoint: ApiEndpoint,
}

impl BotClientBuilder {
    pub fn new() -> Self {
        Self {
            token: None,
            endpoint: ApiEndpoint::Production,
        }
    }

    /// Bot credential, as issued by the platform.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Address requests somewhere other than the production endpoint.
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Keep the standard path layout but root it at `root`.
    ///
    /// Primarily for testing against a local mock server.
    pub fn api_root(mut self, root: &str) -> Result<Self> {
        Url::parse(root).map_err(|e| Error::config(format!("invalid API root {root:?}: {e}")))?;
        self.endpoint = ApiEndpoint::at_root(root);
        Ok(self)
    }

    pub fn build(self) -> Result<BotClient> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config("a non-empty bot token is required"))?;
        let transport = HttpTransport::new(token, self.endpoint)?;
        Ok(BotClient::with_transport(Arc::new(transport)))
    }
}

impl Default for BotClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_a_config_error() {
        let err = BotClientBuilder::new().build().err().expect("build must fail");
        match err {
            Error::Config { message } => assert!(message.contains("token")),
            other => unreachable!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_api_root_is_rejected() {
        assert!(BotClientBuilder::new().api_root("not a url").is_err());
    }
}
