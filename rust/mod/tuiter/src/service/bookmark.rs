use tracing::debug;

use tuiter_core::new_id;

use crate::model::{Bookmark, DeleteStatus, Ref};
use crate::service::collections::{BOOKMARKS, Documents};
use crate::service::{expansion, TuiterError};

/// Access object for the `bookmarks` relation.
pub struct BookmarkDao {
    docs: Documents,
}

impl BookmarkDao {
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    pub async fn user_bookmarks_tuit(&self, uid: &str, tid: &str) -> Result<Bookmark, TuiterError> {
        let bookmark = Bookmark {
            id: new_id(),
            bookmarked_tuit: Ref::from(tid),
            bookmarked_by: Ref::from(uid),
        };
        self.docs.insert(BOOKMARKS, &bookmark.id, &bookmark).await?;
        debug!(uid, tid, "tuit bookmarked");
        Ok(bookmark)
    }

    pub async fn user_unbookmarks_tuit(
        &self,
        uid: &str,
        tid: &str,
    ) -> Result<DeleteStatus, TuiterError> {
        self.docs
            .delete_one(BOOKMARKS, &[("bookmarkedTuit", tid), ("bookmarkedBy", uid)])
            .await
    }

    /// Bookmarks of `uid` with the tuit expanded. The tuit's author stays a raw id.
    pub async fn find_all_tuits_bookmarked_by_user(
        &self,
        uid: &str,
    ) -> Result<Vec<Bookmark>, TuiterError> {
        let bookmarks: Vec<Bookmark> = self.docs.find(BOOKMARKS, &[("bookmarkedBy", uid)]).await?;
        let mut expanded = Vec::with_capacity(bookmarks.len());
        for mut bookmark in bookmarks {
            bookmark.bookmarked_tuit =
                expansion::tuit(&self.docs, bookmark.bookmarked_tuit, false).await?;
            expanded.push(bookmark);
        }
        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use crate::service::testing::{self, test_service};

    #[tokio::test]
    async fn test_bookmark_lifecycle() {
        let svc = test_service();
        let u = testing::user(&svc, "u").await;
        let t = testing::tuit(&svc, &u, "save me").await;

        svc.bookmarks.user_bookmarks_tuit(&u.id, &t.id).await.unwrap();
        let list = svc.bookmarks.find_all_tuits_bookmarked_by_user(&u.id).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].bookmarked_tuit.expanded(), Some(&t));

        let status = svc.bookmarks.user_unbookmarks_tuit(&u.id, &t.id).await.unwrap();
        assert_eq!(status.deleted_count, 1);
        assert!(svc
            .bookmarks
            .find_all_tuits_bookmarked_by_user(&u.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_bookmark_survives_tuit_delete() {
        let svc = test_service();
        let u = testing::user(&svc, "u").await;
        let t = testing::tuit(&svc, &u, "gone soon").await;
        svc.bookmarks.user_bookmarks_tuit(&u.id, &t.id).await.unwrap();
        svc.bookmarks.user_bookmarks_tuit(&u.id, &t.id).await.unwrap();

        svc.tuits.delete_tuit(&t.id).await.unwrap();
        let list = svc.bookmarks.find_all_tuits_bookmarked_by_user(&u.id).await.unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|b| b.bookmarked_tuit.is_dangling()));
    }
}
