use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::chat::{ChatMemberUpdated, User};
use super::message::Message;

/// One inbound event.
///
/// `id` is non-decreasing across the stream but may skip values. The polling
/// loop depends only on `id`; the payload kind is for handler code.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub id: i64,
    pub kind: UpdateKind,
}

// Decoding stays total: the identifier is mandatory, but an update kind this
// registry does not model is preserved raw instead of failing the whole
// batch (the loop must still be able to confirm its offset).
impl<'de> Deserialize<'de> for Update {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = serde_json::Map::deserialize(deserializer)?;
        let id = object
            .remove("update_id")
            .and_then(|v| v.as_i64())
            .ok_or_else(|| D::Error::missing_field("update_id"))?;
        let payload = serde_json::Value::Object(object);
        let kind = UpdateKind::deserialize(payload.clone())
            .unwrap_or(UpdateKind::Unknown(payload));
        Ok(Update { id, kind })
    }
}

/// The closed set of update payload kinds this crate models.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Message(Message),
    EditedMessage(Message),
    ChannelPost(Message),
    EditedChannelPost(Message),
    CallbackQuery(CallbackQuery),
    MyChatMember(ChatMemberUpdated),
    ChatMember(ChatMemberUpdated),
    /// Payload of a kind outside the modeled set, kept verbatim.
    #[serde(skip)]
    Unknown(serde_json::Value),
}

/// Update kinds a poller can subscribe to via `allowed_updates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowedUpdate {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    CallbackQuery,
    MyChatMember,
    ChatMember,
}

/// A button press on an inline keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageContent;
    use serde_json::json;

    #[test]
    fn message_update_decodes() {
        let raw = json!({
            "update_id": 101,
            "message": {
                "message_id": 5,
                "chat": {"id": 7, "type": "private"},
                "date": 1700000000,
                "text": "ping"
            }
        });
        let update: Update = serde_json::from_value(raw).unwrap();
        assert_eq!(update.id, 101);
        match update.kind {
            UpdateKind::Message(msg) => assert_eq!(msg.text(), Some("ping")),
            other => unreachable!("expected message update, got {other:?}"),
        }
    }

    #[test]
    fn unmodeled_update_kind_preserves_id() {
        let raw = json!({
            "update_id": 102,
            "poll_answer": {"poll_id": "p", "option_ids": [0]}
        });
        let update: Update = serde_json::from_value(raw).unwrap();
        assert_eq!(update.id, 102);
        assert!(matches!(update.kind, UpdateKind::Unknown(_)));
    }

    #[test]
    fn update_without_id_is_rejected() {
        let raw = json!({"message": {"message_id": 1}});
        assert!(serde_json::from_value::<Update>(raw).is_err());
    }

    #[test]
    fn edited_message_is_distinct_from_message() {
        let raw = json!({
            "update_id": 103,
            "edited_message": {
                "message_id": 5,
                "chat": {"id": 7, "type": "private"},
                "date": 1700000001,
                "text": "ping (edited)"
            }
        });
        let update: Update = serde_json::from_value(raw).unwrap();
        match &update.kind {
            UpdateKind::EditedMessage(msg) => {
                assert!(matches!(msg.content, MessageContent::Text { .. }));
            }
            other => unreachable!("expected edited_message, got {other:?}"),
        }
    }
}
