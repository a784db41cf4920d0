use serde::{Deserialize, Serialize};

use super::{Ref, Tuit, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub bookmarked_tuit: Ref<Tuit>,
    pub bookmarked_by: Ref<User>,
}
