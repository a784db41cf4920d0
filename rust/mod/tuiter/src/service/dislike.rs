use tracing::debug;

use tuiter_core::new_id;

use crate::model::{DeleteStatus, Dislike, Ref};
use crate::service::collections::{DISLIKES, Documents};
use crate::service::{expansion, TuiterError};

/// Access object for the `dislikes` relation. Mirrors [`super::LikeDao`].
pub struct DislikeDao {
    docs: Documents,
}

impl DislikeDao {
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    pub async fn user_dislikes_tuit(&self, uid: &str, tid: &str) -> Result<Dislike, TuiterError> {
        let dislike = Dislike {
            id: new_id(),
            tuit: Ref::from(tid),
            disliked_by: Ref::from(uid),
        };
        self.docs.insert(DISLIKES, &dislike.id, &dislike).await?;
        debug!(uid, tid, "tuit disliked");
        Ok(dislike)
    }

    pub async fn user_undislikes_tuit(
        &self,
        uid: &str,
        tid: &str,
    ) -> Result<DeleteStatus, TuiterError> {
        self.docs
            .delete_one(DISLIKES, &[("tuit", tid), ("dislikedBy", uid)])
            .await
    }

    pub async fn find_user_dislikes_tuit(
        &self,
        uid: &str,
        tid: &str,
    ) -> Result<Option<Dislike>, TuiterError> {
        self.docs
            .find_one(DISLIKES, &[("tuit", tid), ("dislikedBy", uid)])
            .await
    }

    pub async fn count_how_many_disliked_tuit(&self, tid: &str) -> Result<u64, TuiterError> {
        self.docs.count(DISLIKES, &[("tuit", tid)]).await
    }

    pub async fn find_all_users_that_disliked_tuit(
        &self,
        tid: &str,
    ) -> Result<Vec<Dislike>, TuiterError> {
        let dislikes: Vec<Dislike> = self.docs.find(DISLIKES, &[("tuit", tid)]).await?;
        let mut expanded = Vec::with_capacity(dislikes.len());
        for mut dislike in dislikes {
            dislike.disliked_by = expansion::user(&self.docs, dislike.disliked_by).await?;
            expanded.push(dislike);
        }
        Ok(expanded)
    }

    pub async fn find_all_tuits_disliked_by_user(
        &self,
        uid: &str,
    ) -> Result<Vec<Dislike>, TuiterError> {
        let dislikes: Vec<Dislike> = self.docs.find(DISLIKES, &[("dislikedBy", uid)]).await?;
        let mut expanded = Vec::with_capacity(dislikes.len());
        for mut dislike in dislikes {
            dislike.tuit = expansion::tuit(&self.docs, dislike.tuit, true).await?;
            expanded.push(dislike);
        }
        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use crate::service::testing::{self, test_service};

    #[tokio::test]
    async fn test_dislike_lifecycle() {
        let svc = test_service();
        let alice = testing::user(&svc, "alice").await;
        let bob = testing::user(&svc, "bob").await;
        let t = testing::tuit(&svc, &bob, "meh").await;

        let dislike = svc.dislikes.user_dislikes_tuit(&alice.id, &t.id).await.unwrap();
        assert_eq!(svc.dislikes.count_how_many_disliked_tuit(&t.id).await.unwrap(), 1);
        assert_eq!(
            svc.dislikes.find_user_dislikes_tuit(&alice.id, &t.id).await.unwrap(),
            Some(dislike)
        );

        let by_tuit = svc.dislikes.find_all_users_that_disliked_tuit(&t.id).await.unwrap();
        assert_eq!(by_tuit[0].disliked_by.expanded(), Some(&alice));

        let by_user = svc.dislikes.find_all_tuits_disliked_by_user(&alice.id).await.unwrap();
        let tuit = by_user[0].tuit.expanded().unwrap();
        assert_eq!(tuit.posted_by.expanded(), Some(&bob));

        let status = svc.dislikes.user_undislikes_tuit(&alice.id, &t.id).await.unwrap();
        assert_eq!(status.deleted_count, 1);
        let status = svc.dislikes.user_undislikes_tuit(&alice.id, &t.id).await.unwrap();
        assert_eq!(status.deleted_count, 0);
        assert_eq!(svc.dislikes.count_how_many_disliked_tuit(&t.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_dislikes_independent_of_likes() {
        let svc = test_service();
        svc.likes.user_likes_tuit("u1", "t1").await.unwrap();
        svc.dislikes.user_dislikes_tuit("u1", "t1").await.unwrap();
        svc.dislikes.user_dislikes_tuit("u1", "t1").await.unwrap();

        assert_eq!(svc.likes.count_how_many_liked_tuit("t1").await.unwrap(), 1);
        assert_eq!(svc.dislikes.count_how_many_disliked_tuit("t1").await.unwrap(), 2);
    }
}
