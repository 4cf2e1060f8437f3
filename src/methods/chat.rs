//! Chat management operations.

use serde::{Deserialize, Serialize};

use super::Method;
use crate::types::{Chat, ChatId};

/// Fetch up-to-date information about one chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl Method for GetChat {
    const NAME: &'static str = "getChat";
    type Output = Chat;
}

/// Leave a group, supergroup or channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

impl Method for LeaveChat {
    const NAME: &'static str = "leaveChat";
    type Output = bool;
}

/// Ban a member; the bot needs the matching admin right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoke_messages: Option<bool>,
}

impl Method for BanChatMember {
    const NAME: &'static str = "banChatMember";
    type Output = bool;
}

/// Lift a ban.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_if_banned: Option<bool>,
}

impl Method for UnbanChatMember {
    const NAME: &'static str = "unbanChatMember";
    type Output = bool;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl Method for PinChatMessage {
    const NAME: &'static str = "pinChatMessage";
    type Output = bool;
}

/// Unpin one message, or the most recent one when no id is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
}

impl Method for UnpinChatMessage {
    const NAME: &'static str = "unpinChatMessage";
    type Output = bool;
}
