use serde::{Deserialize, Serialize};

use super::{Ref, User};

/// A direct message from one user to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Body text.
    pub message: String,

    pub from: Ref<User>,

    pub to: Ref<User>,

    /// RFC 3339 timestamp; defaults to creation time.
    pub sent_on: String,
}

/// Body of `POST /users/{uid}/messages/sent/{auid}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    pub message: String,
    #[serde(default)]
    pub sent_on: Option<String>,
}

/// Everything needed to store a message: sender and recipient come from
/// the route, the rest from [`MessageBody`].
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub from: String,
    pub to: String,
    pub message: String,
    pub sent_on: Option<String>,
}

impl NewMessage {
    pub fn new(from: &str, to: &str, body: MessageBody) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            message: body.message,
            sent_on: body.sent_on,
        }
    }
}
