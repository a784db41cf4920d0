use serde::{Deserialize, Serialize};

use super::{Ref, User};

/// `user_following` follows `user_followed`. Self-follows are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub user_followed: Ref<User>,
    pub user_following: Ref<User>,
}
