use serde_json::Value;

use crate::collection::Collection;
use crate::error::StoreError;

/// Conjunction of equality tests: `(document key, expected value)`.
/// `_id` matches the document id. An empty filter matches every document.
pub type Filter<'a> = &'a [(&'a str, &'a str)];

/// Outcome of [`DocumentStore::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCount {
    pub matched: u64,
    /// 0 when the patch left the document unchanged.
    pub modified: u64,
}

/// DocumentStore is the storage contract the access layer is written against.
///
/// Documents are JSON objects addressed by an opaque string id. Writes never
/// check that ids stored in reference fields point at existing documents.
pub trait DocumentStore: Send + Sync {
    /// Create the collection's table and indexes if they do not exist.
    fn ensure_collection(&self, collection: &Collection) -> Result<(), StoreError>;

    /// Insert a new document under `id`.
    fn insert(&self, collection: &Collection, id: &str, doc: &Value) -> Result<(), StoreError>;

    /// All documents matching `filter`, in insertion order.
    fn find(&self, collection: &Collection, filter: Filter<'_>) -> Result<Vec<Value>, StoreError>;

    /// The first document matching `filter`.
    fn find_one(
        &self,
        collection: &Collection,
        filter: Filter<'_>,
    ) -> Result<Option<Value>, StoreError>;

    /// The document stored under `id`.
    fn find_by_id(&self, collection: &Collection, id: &str) -> Result<Option<Value>, StoreError>;

    /// Merge `patch` into the document stored under `id` (JSON merge-patch)
    /// as one atomic step. A missing document matches nothing.
    fn update(&self, collection: &Collection, id: &str, patch: &Value) -> Result<UpdateCount, StoreError>;

    /// Delete the first document matching `filter`. Returns the number deleted (0 or 1).
    fn delete_one(&self, collection: &Collection, filter: Filter<'_>) -> Result<u64, StoreError>;

    /// Delete every document matching `filter`. Returns the number deleted.
    fn delete_many(&self, collection: &Collection, filter: Filter<'_>) -> Result<u64, StoreError>;

    /// Number of documents matching `filter`.
    fn count(&self, collection: &Collection, filter: Filter<'_>) -> Result<u64, StoreError>;
}
