//! Minimal long-polling echo bot.
//!
//! Reads the credential from `BOT_TOKEN`, echoes every text message back to
//! its chat, and shuts down cleanly on ctrl-c.
//!
//! ```sh
//! BOT_TOKEN=123:abc RUST_LOG=botwire=debug,echo_bot=info cargo run --bin echo_bot
//! ```

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use botwire::methods::SendMessage;
use botwire::polling::{handler_fn, UpdatePoller};
use botwire::types::UpdateKind;
use botwire::BotClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let token = std::env::var("BOT_TOKEN")
        .map_err(|_| anyhow::anyhow!("BOT_TOKEN is not set"))?;
    let client = BotClient::new(token)?;

    let sender = client.clone();
    let poller = UpdatePoller::new(
        client,
        handler_fn(move |update| {
            let sender = sender.clone();
            async move {
                match update.kind {
                    UpdateKind::Message(msg) => {
                        if let Some(text) = msg.text() {
                            let sent = sender.call(&SendMessage::new(&msg.chat, text)).await?;
                            info!(chat_id = msg.chat.id, message_id = sent.message_id, "echoed");
                        }
                    }
                    other => warn!(kind = ?other, "ignoring non-message update"),
                }
                Ok(())
            }
        }),
    );

    let cancel = poller.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received, stopping poller");
            cancel.cancel();
        }
    });

    poller.run().await?;
    Ok(())
}
