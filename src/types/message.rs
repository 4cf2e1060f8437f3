use serde::{Deserialize, Serialize};

use super::chat::{Chat, ChatId, User};

/// A message in a chat, with its content flattened into one of the
/// [`MessageContent`] kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    pub chat: Chat,
    pub date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(flatten)]
    pub content: MessageContent,
}

impl Message {
    /// Text of a text message, `None` for any other content kind.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Caption of a media message, when one was attached.
    pub fn caption(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Photo { caption, .. } | MessageContent::Document { caption, .. } => {
                caption.as_deref()
            }
            _ => None,
        }
    }

    /// Addressing value for replying into the same chat.
    pub fn chat_id(&self) -> ChatId {
        ChatId::Id(self.chat.id)
    }
}

/// The closed set of message content kinds this crate models.
///
/// Variants are discriminated by which wire field is present (`text`,
/// `photo`, ...). Content the registry does not model lands in
/// `Unsupported`, so decoding stays total while matches stay exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        entities: Option<Vec<MessageEntity>>,
    },
    Photo {
        photo: Vec<PhotoSize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Document {
        document: Document,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Location {
        location: Location,
    },
    Contact {
        contact: Contact,
    },
    Unsupported {},
}

/// A typed span inside message text (mention, URL, formatting, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: i64,
    pub length: i64,
}

/// One resolution of a photo; the server sends several per photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// A file ready to be downloaded via the file endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// A command the bot advertises in client UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

/// Text formatting mode for outgoing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    #[serde(rename = "MarkdownV2")]
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

/// Which message an outgoing message replies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyParameters {
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<ChatId>,
}

/// Media reference accepted by send-side operations.
///
/// Only reference forms are supported: an identifier of a file already on
/// the servers, or a remote URL the server fetches itself. Uploading local
/// bytes requires a multipart request body, which this transport does not
/// implement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputFile {
    FileId(String),
    Url(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatKind;

    fn chat_json() -> &'static str {
        r#"{"id": 7, "type": "private", "first_name": "Ada"}"#
    }

    #[test]
    fn text_message_decodes_to_text_variant() {
        let raw = format!(
            r#"{{"message_id": 1, "chat": {}, "date": 1700000000, "text": "hi"}}"#,
            chat_json()
        );
        let msg: Message = serde_json::from_str(&raw).unwrap();
        assert_eq!(msg.text(), Some("hi"));
        assert_eq!(msg.chat.kind, ChatKind::Private);
    }

    #[test]
    fn photo_message_decodes_with_caption() {
        let raw = format!(
            r#"{{"message_id": 2, "chat": {}, "date": 1700000000,
                "photo": [{{"file_id": "f", "file_unique_id": "u", "width": 90, "height": 60}}],
                "caption": "sunset"}}"#,
            chat_json()
        );
        let msg: Message = serde_json::from_str(&raw).unwrap();
        assert!(matches!(msg.content, MessageContent::Photo { .. }));
        assert_eq!(msg.caption(), Some("sunset"));
        assert_eq!(msg.text(), None);
    }

    #[test]
    fn unmodeled_content_lands_in_unsupported() {
        let raw = format!(
            r#"{{"message_id": 3, "chat": {}, "date": 1700000000,
                "voice": {{"file_id": "v", "duration": 3}}}}"#,
            chat_json()
        );
        let msg: Message = serde_json::from_str(&raw).unwrap();
        assert_eq!(msg.content, MessageContent::Unsupported {});
    }

    #[test]
    fn input_file_serializes_as_bare_string() {
        let by_id = InputFile::FileId("abc123".into());
        assert_eq!(serde_json::to_string(&by_id).unwrap(), "\"abc123\"");
    }
}
