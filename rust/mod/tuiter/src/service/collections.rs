//! Collection declarations and async access to the document store.
//!
//! The store itself is blocking (one SQLite connection behind a mutex), so
//! every call is moved onto tokio's blocking pool and awaited. Handlers never
//! hold the runtime while a query runs.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use tuiter_store::{Collection, DocumentStore, Field, StoreError};

use crate::model::{DeleteStatus, UpdateStatus};
use crate::service::TuiterError;

pub const USERS: Collection = Collection::new("users", &[Field::new("username", "username")]);

pub const TUITS: Collection = Collection::new("tuits", &[Field::new("postedBy", "posted_by")]);

pub const LIKES: Collection = Collection::new(
    "likes",
    &[Field::new("tuit", "tuit"), Field::new("likedBy", "liked_by")],
);

pub const DISLIKES: Collection = Collection::new(
    "dislikes",
    &[Field::new("tuit", "tuit"), Field::new("dislikedBy", "disliked_by")],
);

pub const FOLLOWS: Collection = Collection::new(
    "follow",
    &[
        Field::new("userFollowed", "user_followed"),
        Field::new("userFollowing", "user_following"),
    ],
);

pub const BOOKMARKS: Collection = Collection::new(
    "bookmarks",
    &[
        Field::new("bookmarkedTuit", "bookmarked_tuit"),
        Field::new("bookmarkedBy", "bookmarked_by"),
    ],
);

// `from` and `to` are SQL keywords, hence the column names.
pub const MESSAGES: Collection = Collection::new(
    "messages",
    &[Field::new("from", "from_user"), Field::new("to", "to_user")],
);

pub const ALL: [Collection; 7] = [USERS, TUITS, LIKES, DISLIKES, FOLLOWS, BOOKMARKS, MESSAGES];

type OwnedFilter = Vec<(&'static str, String)>;

fn owned(filter: &[(&'static str, &str)]) -> OwnedFilter {
    filter.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

fn borrowed(filter: &OwnedFilter) -> Vec<(&str, &str)> {
    filter.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

fn to_document<T: Serialize>(doc: &T) -> Result<Value, TuiterError> {
    serde_json::to_value(doc).map_err(|e| TuiterError::Internal(e.to_string()))
}

fn from_document<T: DeserializeOwned>(doc: Value) -> Result<T, TuiterError> {
    serde_json::from_value(doc).map_err(|e| TuiterError::Internal(e.to_string()))
}

/// Typed, non-blocking handle on the document store. Cheap to clone.
#[derive(Clone)]
pub struct Documents {
    store: Arc<dyn DocumentStore>,
}

impl Documents {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create every collection's table. Runs once at startup, before the
    /// runtime starts serving requests.
    pub fn init_schema(&self) -> Result<(), TuiterError> {
        for collection in &ALL {
            self.store.ensure_collection(collection)?;
        }
        Ok(())
    }

    async fn blocking<R, F>(&self, op: F) -> Result<R, TuiterError>
    where
        F: FnOnce(&dyn DocumentStore) -> Result<R, StoreError> + Send + 'static,
        R: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| TuiterError::Internal(format!("store task failed: {e}")))?;
        Ok(result?)
    }

    pub async fn insert<T: Serialize>(
        &self,
        collection: Collection,
        id: &str,
        doc: &T,
    ) -> Result<(), TuiterError> {
        let doc = to_document(doc)?;
        let id = id.to_string();
        self.blocking(move |store| store.insert(&collection, &id, &doc))
            .await
    }

    pub async fn find<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: &[(&'static str, &str)],
    ) -> Result<Vec<T>, TuiterError> {
        let filter = owned(filter);
        let docs = self
            .blocking(move |store| store.find(&collection, &borrowed(&filter)))
            .await?;
        docs.into_iter().map(from_document).collect()
    }

    pub async fn find_one<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: &[(&'static str, &str)],
    ) -> Result<Option<T>, TuiterError> {
        let filter = owned(filter);
        self.blocking(move |store| store.find_one(&collection, &borrowed(&filter)))
            .await?
            .map(from_document)
            .transpose()
    }

    pub async fn find_by_id<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<T>, TuiterError> {
        let id = id.to_string();
        self.blocking(move |store| store.find_by_id(&collection, &id))
            .await?
            .map(from_document)
            .transpose()
    }

    pub async fn delete_one(
        &self,
        collection: Collection,
        filter: &[(&'static str, &str)],
    ) -> Result<DeleteStatus, TuiterError> {
        let filter = owned(filter);
        let deleted_count = self
            .blocking(move |store| store.delete_one(&collection, &borrowed(&filter)))
            .await?;
        Ok(DeleteStatus { deleted_count })
    }

    pub async fn delete_many(
        &self,
        collection: Collection,
        filter: &[(&'static str, &str)],
    ) -> Result<DeleteStatus, TuiterError> {
        let filter = owned(filter);
        let deleted_count = self
            .blocking(move |store| store.delete_many(&collection, &borrowed(&filter)))
            .await?;
        Ok(DeleteStatus { deleted_count })
    }

    pub async fn count(
        &self,
        collection: Collection,
        filter: &[(&'static str, &str)],
    ) -> Result<u64, TuiterError> {
        let filter = owned(filter);
        self.blocking(move |store| store.count(&collection, &borrowed(&filter)))
            .await
    }

    /// Merge `patch` into the document stored under `id` (JSON merge-patch).
    ///
    /// A missing document is reported as zero matches, not as an error.
    pub async fn update_one(
        &self,
        collection: Collection,
        id: &str,
        patch: Value,
    ) -> Result<UpdateStatus, TuiterError> {
        let id = id.to_string();
        let count = self
            .blocking(move |store| store.update(&collection, &id, &patch))
            .await?;
        Ok(UpdateStatus {
            matched_count: count.matched,
            modified_count: count.modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tuiter_store::SqliteStore;

    fn docs() -> Documents {
        let docs = Documents::new(Arc::new(SqliteStore::open_in_memory().unwrap()));
        docs.init_schema().unwrap();
        docs
    }

    #[tokio::test]
    async fn test_update_one_status() {
        let docs = docs();
        docs.insert(TUITS, "t1", &json!({"_id": "t1", "tuit": "a", "postedBy": "u1"}))
            .await
            .unwrap();

        let status = docs.update_one(TUITS, "t1", json!({"tuit": "b"})).await.unwrap();
        assert_eq!(status, UpdateStatus { matched_count: 1, modified_count: 1 });

        let status = docs.update_one(TUITS, "t1", json!({"tuit": "b"})).await.unwrap();
        assert_eq!(status, UpdateStatus { matched_count: 1, modified_count: 0 });

        let status = docs.update_one(TUITS, "nope", json!({"tuit": "b"})).await.unwrap();
        assert_eq!(status, UpdateStatus { matched_count: 0, modified_count: 0 });

        let stored: Value = docs.find_by_id(TUITS, "t1").await.unwrap().unwrap();
        assert_eq!(stored, json!({"_id": "t1", "tuit": "b", "postedBy": "u1"}));
    }

    #[tokio::test]
    async fn test_unknown_filter_field_is_a_storage_error() {
        let docs = docs();
        let err = docs
            .find::<Value>(MESSAGES, &[("sentOn", "today")])
            .await
            .unwrap_err();
        assert!(matches!(err, TuiterError::Storage(_)));
    }

    #[tokio::test]
    async fn test_message_keys_map_to_safe_columns() {
        let docs = docs();
        docs.insert(MESSAGES, "m1", &json!({"_id": "m1", "from": "a", "to": "b"}))
            .await
            .unwrap();
        assert_eq!(docs.count(MESSAGES, &[("from", "a")]).await.unwrap(), 1);
        assert_eq!(docs.count(MESSAGES, &[("to", "a")]).await.unwrap(), 0);
    }
}
