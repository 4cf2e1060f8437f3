//! # botwire
//!
//! Typed client for the Bot API with a long-polling update runner.
//!
//! ## Overview
//!
//! Two things live here: a request/response dispatch pipeline (transport,
//! envelope decoding, one generic typed call path) and a standing consumer
//! loop that long-polls for inbound updates and feeds them, one at a time,
//! to a user-supplied handler - offset tracking and retry policy included,
//! so callers never write their own polling logic.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use botwire::methods::SendMessage;
//! use botwire::polling::{handler_fn, UpdatePoller};
//! use botwire::types::UpdateKind;
//! use botwire::BotClient;
//!
//! #[tokio::main]
//! async fn main() -> botwire::Result<()> {
//!     let client = BotClient::new(std::env::var("BOT_TOKEN").unwrap())?;
//!
//!     let sender = client.clone();
//!     let poller = UpdatePoller::new(
//!         client,
//!         handler_fn(move |update| {
//!             let sender = sender.clone();
//!             async move {
//!                 if let UpdateKind::Message(msg) = update.kind {
//!                     if let Some(text) = msg.text() {
//!                         sender.call(&SendMessage::new(&msg.chat, text)).await?;
//!                     }
//!                 }
//!                 Ok(())
//!             }
//!         }),
//!     );
//!
//!     poller.run().await
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Typed dispatch: the generic call path and the builder |
//! | [`transport`] | One HTTP round trip per call, envelope decoding |
//! | [`methods`] | Typed method payloads and the [`methods::Method`] seam |
//! | [`types`] | Domain objects: updates, messages, chats, users |
//! | [`polling`] | The long-polling consumer loop |
//!
//! ## Error taxonomy
//!
//! [`TransportError`]: no well-formed server answer was obtained - always
//! transient. [`ApiError`]: the server explicitly rejected the call -
//! retryable unless the code marks the credential unusable (401/403/404).
//! Handler failures are opaque `anyhow` errors, logged at the point of
//! delivery and never fatal to the loop.

pub mod client;
pub mod error;
pub mod methods;
pub mod polling;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{BotClient, BotClientBuilder};
pub use error::{ApiError, Error, Result};
pub use polling::{current_update, handler_fn, PollerConfig, UpdateHandler, UpdatePoller};
pub use transport::{ApiEndpoint, Transport, TransportError};
pub use types::{Message, Update, UpdateKind};
