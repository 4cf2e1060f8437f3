//! Update retrieval and callback-query acknowledgement.

use serde::{Deserialize, Serialize};

use super::Method;
use crate::types::{AllowedUpdate, Update};

/// Long-poll for inbound updates.
///
/// `offset` is the confirmation mechanism: requesting offset `n` tells the
/// server every update with id below `n` is consumed and may be dropped.
/// `timeout` is the server-side hold (seconds); zero means a plain poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";
    type Output = Vec<Update>;
}

/// Acknowledge a callback query so the client stops its progress spinner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
        }
    }
}

impl Method for AnswerCallbackQuery {
    const NAME: &'static str = "answerCallbackQuery";
    type Output = bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_stay_off_the_wire() {
        let body = serde_json::to_value(GetUpdates::default()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn long_poll_request_shape() {
        let body = serde_json::to_value(GetUpdates {
            offset: Some(42),
            limit: Some(1),
            timeout: Some(30),
            allowed_updates: None,
        })
        .unwrap();
        assert_eq!(body, json!({"offset": 42, "limit": 1, "timeout": 30}));
    }
}
