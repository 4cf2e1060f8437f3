//! Send-side and edit-side message operations.

use serde::{Deserialize, Serialize};

use super::Method;
use crate::types::{ChatAction, ChatId, InputFile, Message, ParseMode, ReplyParameters};

/// Send a text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            disable_notification: None,
            reply_parameters: None,
        }
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    pub fn in_reply_to(mut self, message_id: i64) -> Self {
        self.reply_parameters = Some(ReplyParameters {
            message_id,
            chat_id: None,
        });
        self
    }
}

impl Method for SendMessage {
    const NAME: &'static str = "sendMessage";
    type Output = Message;
}

/// Forward a message, keeping the original attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl Method for ForwardMessage {
    const NAME: &'static str = "forwardMessage";
    type Output = Message;
}

/// Identifier-only result of [`CopyMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId {
    pub message_id: i64,
}

/// Copy a message without the original attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyMessage {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Method for CopyMessage {
    const NAME: &'static str = "copyMessage";
    type Output = MessageId;
}

/// Send a photo by reference (file id or remote URL).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPhoto {
    pub chat_id: ChatId,
    pub photo: InputFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Method for SendPhoto {
    const NAME: &'static str = "sendPhoto";
    type Output = Message;
}

/// Send a document by reference (file id or remote URL).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendDocument {
    pub chat_id: ChatId,
    pub document: InputFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Method for SendDocument {
    const NAME: &'static str = "sendDocument";
    type Output = Message;
}

/// Show an activity indicator in a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendChatAction {
    pub chat_id: ChatId,
    pub action: ChatAction,
}

impl Method for SendChatAction {
    const NAME: &'static str = "sendChatAction";
    type Output = bool;
}

/// Edit the text of an already-sent message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditMessageText {
    pub chat_id: ChatId,
    pub message_id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
}

impl Method for EditMessageText {
    const NAME: &'static str = "editMessageText";
    type Output = Message;
}

/// Delete a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl Method for DeleteMessage {
    const NAME: &'static str = "deleteMessage";
    type Output = bool;
}
