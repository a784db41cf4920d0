use tracing::debug;

use tuiter_core::new_id;

use crate::model::{DeleteStatus, Follow, Ref};
use crate::service::collections::{Documents, FOLLOWS};
use crate::service::{expansion, TuiterError};

/// Access object for the `follow` relation.
pub struct FollowDao {
    docs: Documents,
}

impl FollowDao {
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    /// `uid` starts following `auid`. Self-follows and repeats are stored as-is.
    pub async fn user_follows(&self, uid: &str, auid: &str) -> Result<Follow, TuiterError> {
        let follow = Follow {
            id: new_id(),
            user_followed: Ref::from(auid),
            user_following: Ref::from(uid),
        };
        self.docs.insert(FOLLOWS, &follow.id, &follow).await?;
        debug!(uid, auid, "user followed");
        Ok(follow)
    }

    pub async fn user_unfollows(&self, uid: &str, auid: &str) -> Result<DeleteStatus, TuiterError> {
        self.docs
            .delete_one(FOLLOWS, &[("userFollowed", auid), ("userFollowing", uid)])
            .await
    }

    /// Everyone `uid` follows, with `userFollowed` expanded.
    pub async fn user_following_list(&self, uid: &str) -> Result<Vec<Follow>, TuiterError> {
        let follows: Vec<Follow> = self.docs.find(FOLLOWS, &[("userFollowing", uid)]).await?;
        let mut expanded = Vec::with_capacity(follows.len());
        for mut follow in follows {
            follow.user_followed = expansion::user(&self.docs, follow.user_followed).await?;
            expanded.push(follow);
        }
        Ok(expanded)
    }

    /// Everyone following `uid`, with `userFollowing` expanded.
    pub async fn user_followed_list(&self, uid: &str) -> Result<Vec<Follow>, TuiterError> {
        let follows: Vec<Follow> = self.docs.find(FOLLOWS, &[("userFollowed", uid)]).await?;
        let mut expanded = Vec::with_capacity(follows.len());
        for mut follow in follows {
            follow.user_following = expansion::user(&self.docs, follow.user_following).await?;
            expanded.push(follow);
        }
        Ok(expanded)
    }
}
