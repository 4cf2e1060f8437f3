//! # Polling Module
//!
//! Long-polling consumer loop: repeatedly retrieves inbound updates, tracks
//! the confirmation offset, applies the retry policy to transient failures
//! and delivers each update to a handler, one at a time.
//!
//! ## Delivery semantics
//!
//! The offset advances after the handler ran, whether it succeeded or not,
//! and the cursor lives only in memory. Across a crash and restart the
//! server may redeliver the most recently unconfirmed update: delivery is
//! at-least-once, never exactly-once.
//!
//! ## One poller per credential
//!
//! The server serializes long-poll consumption per credential. Running two
//! pollers against the same token is unsafe and must be prevented by the
//! caller; this component does not enforce it.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::client::BotClient;
use crate::error::Result;
use crate::methods::GetUpdates;
use crate::types::{AllowedUpdate, Update};

mod context;
mod cursor;
mod retry;

pub use context::current_update;

use cursor::OffsetCursor;
use retry::RetryDecision;

/// Receives one update at a time from the poller.
///
/// A returned error is logged and dropped; it never stops the loop. The
/// update is also available to the whole call tree via [`current_update`].
#[async_trait]
pub trait UpdateHandler: Send + Sync {
    async fn handle(&self, update: Update) -> anyhow::Result<()>;
}

/// Adapter turning an async closure into an [`UpdateHandler`].
pub struct HandlerFn<F>(F);

pub fn handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(Update) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    HandlerFn(f)
}

#[async_trait]
impl<F, Fut> UpdateHandler for HandlerFn<F>
where
    F: Fn(Update) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    async fn handle(&self, update: Update) -> anyhow::Result<()> {
        (self.0)(update).await
    }
}

#[async_trait]
impl<T: UpdateHandler + ?Sized> UpdateHandler for std::sync::Arc<T> {
    async fn handle(&self, update: Update) -> anyhow::Result<()> {
        (**self).handle(update).await
    }
}

/// Poller knobs. The defaults are the intended production values.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Server-side long-poll hold per retrieval call.
    pub poll_timeout: Duration,
    /// Fixed wait between retries of a failed retrieval call. Deliberately
    /// not exponential; a documented limitation under sustained outage.
    pub retry_interval: Duration,
    /// Updates requested per retrieval call.
    pub limit: u8,
    /// Update kinds to subscribe to; `None` keeps the server default.
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_secs(30),
            retry_interval: Duration::from_secs(3),
            limit: 1,
            allowed_updates: None,
        }
    }
}

/// The long-polling consumer loop.
///
/// Exactly one retrieval call is in flight at a time, and exactly one update
/// is handed to the handler at a time. A bounded producer/consumer split was
/// rejected: it can deliver an update whose offset was never confirmed,
/// risking duplicate processing on restart, and buys no throughput since the
/// handler must finish before the next retrieval is useful anyway.
pub struct UpdatePoller<H> {
    client: BotClient,
    handler: H,
    config: PollerConfig,
    cursor: OffsetCursor,
    cancel: CancellationToken,
}

impl<H: UpdateHandler> UpdatePoller<H> {
    pub fn new(client: BotClient, handler: H) -> Self {
        Self::with_config(client, handler, PollerConfig::default())
    }

    pub fn with_config(client: BotClient, handler: H, config: PollerConfig) -> Self {
        Self {
            client,
            handler,
            config,
            cursor: OffsetCursor::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Token that stops the loop. Cancellation is cooperative: it wins over
    /// the retry sleep and the long-poll wait, but a request already written
    /// to the socket is not aborted mid-flight.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Drive the loop until cancellation (`Ok`) or a fatal rejection of the
    /// retrieval call itself (`Err`).
    ///
    /// Transport failures and retryable rejections wait out the retry
    /// interval and repeat with the same offset. Handler failures are logged
    /// and the offset still advances - the sole confirmation point is after
    /// dispatch, success or not.
    pub async fn run(mut self) -> Result<()> {
        info!("update poller started");
        loop {
            if self.cancel.is_cancelled() {
                info!("update poller stopped");
                return Ok(());
            }

            let request = GetUpdates {
                offset: self.cursor.next_offset(),
                limit: Some(self.config.limit),
                timeout: Some(self.config.poll_timeout.as_secs() as u32),
                allowed_updates: self.config.allowed_updates.clone(),
            };

            let outcome = tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("update poller stopped");
                    return Ok(());
                }
                outcome = self.client.call(&request) => outcome,
            };

            match outcome {
                Ok(updates) => {
                    for update in updates {
                        self.dispatch(update).await;
                    }
                }
                Err(error) => match retry::decide(&error, self.config.retry_interval) {
                    RetryDecision::Retry { delay } => {
                        warn!(
                            error = %error,
                            delay_ms = delay.as_millis() as u64,
                            "retrieval failed, retrying with the same offset"
                        );
                        tokio::select! {
                            _ = self.cancel.cancelled() => {
                                info!("update poller stopped");
                                return Ok(());
                            }
                            _ = tokio::time::sleep(delay) => {}
                        }
                    }
                    RetryDecision::Fail => {
                        error!(error = %error, "fatal retrieval failure, poller ending");
                        return Err(error);
                    }
                },
            }
        }
    }

    async fn dispatch(&mut self, update: Update) {
        let update_id = update.id;
        debug!(update_id, "dispatching update");

        let outcome = context::with_current_update(update.clone(), self.handler.handle(update)).await;
        if let Err(handler_error) = outcome {
            error!(update_id, error = %handler_error, "update handler failed");
        }

        // Sole confirmation point: advance whether or not the handler
        // succeeded, so one poisonous update cannot wedge the stream.
        self.cursor.confirm(update_id);
    }
}
