use serde::{Deserialize, Serialize};

use super::{Ref, User};

/// Engagement counters embedded in every tuit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub replies: u64,
    #[serde(default)]
    pub retuits: u64,
    #[serde(default)]
    pub likes: u64,
}

/// A post. Owned by the user in `posted_by`; deleting that user leaves the
/// reference dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tuit {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Text body.
    pub tuit: String,

    /// RFC 3339 timestamp; defaults to creation time.
    pub posted_on: String,

    pub posted_by: Ref<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_overlay: Option<String>,

    #[serde(default)]
    pub stats: Stats,
}

/// Input for `POST /users/{uid}/tuits`. The author comes from the path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTuit {
    pub tuit: String,
    #[serde(default)]
    pub posted_on: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub avatar_logo: Option<String>,
    #[serde(default)]
    pub image_overlay: Option<String>,
    #[serde(default)]
    pub stats: Option<Stats>,
}

/// Partial update for a tuit. The author cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTuit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_overlay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_ignores_posted_by() {
        let patch: UpdateTuit = serde_json::from_value(serde_json::json!({
            "tuit": "edited",
            "postedBy": "someone-else",
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"tuit": "edited"})
        );
    }

    #[test]
    fn test_stats_default_to_zero() {
        let tuit: Tuit = serde_json::from_value(serde_json::json!({
            "_id": "t1",
            "tuit": "hello",
            "postedOn": "2026-01-01T00:00:00Z",
            "postedBy": "u1",
        }))
        .unwrap();
        assert_eq!(tuit.stats, Stats::default());
        assert_eq!(tuit.posted_by.as_id(), Some("u1"));
    }
}
