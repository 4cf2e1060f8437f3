//! # Types Module
//!
//! Typed representations of the objects the Bot API sends and receives.
//! Wire structs mirror the JSON shapes exactly; optional fields are omitted
//! from request bodies rather than sent as `null`.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Update`] | One inbound event with its monotonic identifier |
//! | [`UpdateKind`] | Closed set of update payload kinds |
//! | [`Message`] | A chat message with its content variant |
//! | [`MessageContent`] | Closed set of message content kinds |
//! | [`ChatId`] | Chat addressing: numeric id or `@username` |
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chat`] | Chats, users, membership and chat actions |
//! | [`message`] | Messages, content variants and attachments |
//! | [`update`] | Inbound updates and callback queries |

pub mod chat;
pub mod message;
pub mod update;

pub use chat::{Chat, ChatAction, ChatId, ChatKind, ChatMember, ChatMemberStatus, ChatMemberUpdated, User};
pub use message::{
    BotCommand, Contact, Document, File, InputFile, Location, Message, MessageContent,
    MessageEntity, ParseMode, PhotoSize, ReplyParameters,
};
pub use update::{AllowedUpdate, CallbackQuery, Update, UpdateKind};

use serde::{Deserialize, Serialize};

/// Extra information some failure envelopes carry.
///
/// `retry_after` accompanies flood-control rejections; `migrate_to_chat_id`
/// accompanies rejections caused by a group upgrading to a supergroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
}
