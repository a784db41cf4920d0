use tracing::debug;

use tuiter_core::new_id;

use crate::model::{DeleteStatus, Like, Ref};
use crate::service::collections::{Documents, LIKES};
use crate::service::{expansion, TuiterError};

/// Access object for the `likes` relation.
pub struct LikeDao {
    docs: Documents,
}

impl LikeDao {
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    /// Record that `uid` likes `tid`. Liking twice stores two records.
    pub async fn user_likes_tuit(&self, uid: &str, tid: &str) -> Result<Like, TuiterError> {
        let like = Like {
            id: new_id(),
            tuit: Ref::from(tid),
            liked_by: Ref::from(uid),
        };
        self.docs.insert(LIKES, &like.id, &like).await?;
        debug!(uid, tid, "tuit liked");
        Ok(like)
    }

    /// Remove one like for the pair, if any.
    pub async fn user_unlikes_tuit(&self, uid: &str, tid: &str) -> Result<DeleteStatus, TuiterError> {
        self.docs
            .delete_one(LIKES, &[("tuit", tid), ("likedBy", uid)])
            .await
    }

    pub async fn find_user_likes_tuit(
        &self,
        uid: &str,
        tid: &str,
    ) -> Result<Option<Like>, TuiterError> {
        self.docs
            .find_one(LIKES, &[("tuit", tid), ("likedBy", uid)])
            .await
    }

    pub async fn count_how_many_liked_tuit(&self, tid: &str) -> Result<u64, TuiterError> {
        self.docs.count(LIKES, &[("tuit", tid)]).await
    }

    /// Likes of `tid` with `likedBy` expanded.
    pub async fn find_all_users_that_liked_tuit(&self, tid: &str) -> Result<Vec<Like>, TuiterError> {
        let likes: Vec<Like> = self.docs.find(LIKES, &[("tuit", tid)]).await?;
        let mut expanded = Vec::with_capacity(likes.len());
        for mut like in likes {
            like.liked_by = expansion::user(&self.docs, like.liked_by).await?;
            expanded.push(like);
        }
        Ok(expanded)
    }

    /// Likes by `uid` with `tuit` expanded, including the tuit's author.
    pub async fn find_all_tuits_liked_by_user(&self, uid: &str) -> Result<Vec<Like>, TuiterError> {
        let likes: Vec<Like> = self.docs.find(LIKES, &[("likedBy", uid)]).await?;
        let mut expanded = Vec::with_capacity(likes.len());
        for mut like in likes {
            like.tuit = expansion::tuit(&self.docs, like.tuit, true).await?;
            expanded.push(like);
        }
        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use crate::service::testing::{self, test_service};

    #[tokio::test]
    async fn test_like_then_list_includes_user() {
        let svc = test_service();
        let alice = testing::user(&svc, "alice").await;
        let bob = testing::user(&svc, "bob").await;
        let t = testing::tuit(&svc, &bob, "likeable").await;

        let like = svc.likes.user_likes_tuit(&alice.id, &t.id).await.unwrap();
        assert_eq!(like.tuit.as_id(), Some(t.id.as_str()));

        let likes = svc.likes.find_all_users_that_liked_tuit(&t.id).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].liked_by.expanded(), Some(&alice));
        assert_eq!(likes[0].tuit.as_id(), Some(t.id.as_str()));
    }

    #[tokio::test]
    async fn test_tuits_liked_by_user_expand_author() {
        let svc = test_service();
        let alice = testing::user(&svc, "alice").await;
        let bob = testing::user(&svc, "bob").await;
        let t = testing::tuit(&svc, &bob, "nested").await;
        svc.likes.user_likes_tuit(&alice.id, &t.id).await.unwrap();

        let likes = svc.likes.find_all_tuits_liked_by_user(&alice.id).await.unwrap();
        assert_eq!(likes.len(), 1);
        let tuit = likes[0].tuit.expanded().unwrap();
        assert_eq!(tuit.tuit, "nested");
        assert_eq!(tuit.posted_by.expanded(), Some(&bob));
        assert_eq!(likes[0].liked_by.as_id(), Some(alice.id.as_str()));
    }

    #[tokio::test]
    async fn test_duplicate_likes_are_distinct() {
        let svc = test_service();
        let first = svc.likes.user_likes_tuit("u1", "t1").await.unwrap();
        let second = svc.likes.user_likes_tuit("u1", "t1").await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(svc.likes.count_how_many_liked_tuit("t1").await.unwrap(), 2);

        assert_eq!(svc.likes.user_unlikes_tuit("u1", "t1").await.unwrap().deleted_count, 1);
        assert_eq!(svc.likes.count_how_many_liked_tuit("t1").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unlike_missing_pair_is_zero() {
        let svc = test_service();
        let status = svc.likes.user_unlikes_tuit("u1", "t1").await.unwrap();
        assert_eq!(status.deleted_count, 0);
        assert!(svc.likes.find_user_likes_tuit("u1", "t1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_user_likes_tuit() {
        let svc = test_service();
        let like = svc.likes.user_likes_tuit("u1", "t1").await.unwrap();
        svc.likes.user_likes_tuit("u2", "t1").await.unwrap();

        let found = svc.likes.find_user_likes_tuit("u1", "t1").await.unwrap();
        assert_eq!(found, Some(like));
        assert!(svc.likes.find_user_likes_tuit("u1", "t2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dangling_user_expands_to_null() {
        let svc = test_service();
        let alice = testing::user(&svc, "alice").await;
        let t = testing::tuit(&svc, &alice, "mine").await;
        svc.likes.user_likes_tuit(&alice.id, &t.id).await.unwrap();

        svc.users.delete_user(&alice.id).await.unwrap();
        let likes = svc.likes.find_all_users_that_liked_tuit(&t.id).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert!(likes[0].liked_by.is_dangling());
        assert!(serde_json::to_value(&likes[0]).unwrap()["likedBy"].is_null());

        svc.tuits.delete_tuit(&t.id).await.unwrap();
        let likes = svc.likes.find_all_tuits_liked_by_user(&alice.id).await.unwrap();
        assert!(likes[0].tuit.is_dangling());
    }
}
