use tracing::info;

use tuiter_core::{new_id, now_rfc3339};
use tuiter_store::ID_KEY;

use crate::model::{CreateTuit, DeleteStatus, Ref, Tuit, UpdateStatus, UpdateTuit};
use crate::service::collections::{Documents, TUITS};
use crate::service::TuiterError;

/// Access object for the `tuits` collection. Reads return `postedBy` as
/// the raw user id.
pub struct TuitDao {
    docs: Documents,
}

impl TuitDao {
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    pub async fn find_all_tuits(&self) -> Result<Vec<Tuit>, TuiterError> {
        self.docs.find(TUITS, &[]).await
    }

    pub async fn find_tuit_by_id(&self, tid: &str) -> Result<Tuit, TuiterError> {
        self.docs
            .find_by_id(TUITS, tid)
            .await?
            .ok_or_else(|| TuiterError::NotFound(format!("tuits/{tid}")))
    }

    pub async fn find_tuits_by_user(&self, uid: &str) -> Result<Vec<Tuit>, TuiterError> {
        self.docs.find(TUITS, &[("postedBy", uid)]).await
    }

    /// Post a tuit as `uid`. The author is not checked for existence.
    pub async fn create_tuit(&self, uid: &str, input: CreateTuit) -> Result<Tuit, TuiterError> {
        let tuit = Tuit {
            id: new_id(),
            tuit: input.tuit,
            posted_on: input.posted_on.unwrap_or_else(now_rfc3339),
            posted_by: Ref::from(uid),
            image: input.image,
            youtube: input.youtube,
            avatar_logo: input.avatar_logo,
            image_overlay: input.image_overlay,
            stats: input.stats.unwrap_or_default(),
        };
        self.docs.insert(TUITS, &tuit.id, &tuit).await?;
        info!(tid = %tuit.id, uid, "tuit created");
        Ok(tuit)
    }

    pub async fn update_tuit(
        &self,
        tid: &str,
        patch: UpdateTuit,
    ) -> Result<UpdateStatus, TuiterError> {
        let doc =
            serde_json::to_value(&patch).map_err(|e| TuiterError::Internal(e.to_string()))?;
        self.docs.update_one(TUITS, tid, doc).await
    }

    pub async fn delete_tuit(&self, tid: &str) -> Result<DeleteStatus, TuiterError> {
        self.docs.delete_one(TUITS, &[(ID_KEY, tid)]).await
    }
}
