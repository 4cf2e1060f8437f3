//! # Methods Module
//!
//! The typed call surface: one payload struct per API method, all invoked
//! through the single generic [`BotClient::call`] path.
//!
//! [`Method`] binds a method's wire name to its parameter shape (the struct
//! itself, serialized as the JSON request body) and its result shape
//! (`Output`, deserialized from the success envelope). Call sites stay fully
//! typed without a hand-written wrapper per method.
//!
//! The structs here are the registry subset this crate ships; the seam is
//! open for the rest of the catalogue - implementing [`Method`] is all a new
//! entry needs.
//!
//! [`BotClient::call`]: crate::client::BotClient::call

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod chat;
pub mod messaging;
pub mod updates;

pub use chat::{
    BanChatMember, GetChat, LeaveChat, PinChatMessage, UnbanChatMember, UnpinChatMessage,
};
pub use messaging::{
    CopyMessage, DeleteMessage, EditMessageText, ForwardMessage, MessageId, SendChatAction,
    SendDocument, SendMessage, SendPhoto,
};
pub use updates::{AnswerCallbackQuery, GetUpdates};

use crate::types::{BotCommand, File, User};

/// A named API method: its wire name, parameter shape and result shape.
///
/// The parameter shape is the implementing struct; the result shape is
/// `Output`. Both sides of the contract are compile-time only - the server
/// does not validate the result against anything, see
/// [`TransportError::Decode`](crate::transport::TransportError::Decode).
pub trait Method: Serialize + Send + Sync {
    /// Wire name, as it appears in the request URL.
    const NAME: &'static str;

    /// Shape of the success envelope's `result` field.
    type Output: DeserializeOwned + Send + 'static;
}

/// Basic information about the bot the credential belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetMe {}

impl Method for GetMe {
    const NAME: &'static str = "getMe";
    type Output = User;
}

/// Log out from the cloud server before moving to a self-hosted one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogOut {}

impl Method for LogOut {
    const NAME: &'static str = "logOut";
    type Output = bool;
}

/// Close the server instance before moving it elsewhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Close {}

impl Method for Close {
    const NAME: &'static str = "close";
    type Output = bool;
}

/// Fetch download information for a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl Method for GetFile {
    const NAME: &'static str = "getFile";
    type Output = File;
}

/// Replace the command list shown in client UIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetMyCommands {
    pub commands: Vec<BotCommand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for SetMyCommands {
    const NAME: &'static str = "setMyCommands";
    type Output = bool;
}

/// Current command list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetMyCommands {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for GetMyCommands {
    const NAME: &'static str = "getMyCommands";
    type Output = Vec<BotCommand>;
}
