use serde::{Deserialize, Serialize};

use super::{Ref, Tuit, User};

/// A user liking a tuit. Nothing prevents duplicate pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub tuit: Ref<Tuit>,
    pub liked_by: Ref<User>,
}

/// A user disliking a tuit. Same shape and caveats as [`Like`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dislike {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub tuit: Ref<Tuit>,
    pub disliked_by: Ref<User>,
}
