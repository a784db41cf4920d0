pub mod bookmark;
pub mod collections;
pub mod dislike;
pub mod expansion;
pub mod follow;
pub mod like;
pub mod message;
pub mod password;
pub mod tuit;
pub mod user;

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use tuiter_store::{DocumentStore, StoreError};

pub use bookmark::BookmarkDao;
pub use collections::Documents;
pub use dislike::DislikeDao;
pub use follow::FollowDao;
pub use like::LikeDao;
pub use message::MessageDao;
pub use tuit::TuitDao;
pub use user::UserDao;

/// Tuiter service error type.
#[derive(Debug, Error)]
pub enum TuiterError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage: {0}")]
    Storage(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl From<StoreError> for TuiterError {
    fn from(e: StoreError) -> Self {
        TuiterError::Storage(e.to_string())
    }
}

impl From<TuiterError> for tuiter_core::ServiceError {
    fn from(e: TuiterError) -> Self {
        match e {
            TuiterError::NotFound(m) => tuiter_core::ServiceError::NotFound(m),
            TuiterError::Storage(m) => tuiter_core::ServiceError::StoreOperationFailed(m),
            TuiterError::Internal(m) => tuiter_core::ServiceError::Internal(m),
        }
    }
}

/// All access objects, built once at startup and shared by every request.
///
/// Each access object wraps the same document store; none of them
/// coordinates with another, so there are no cross-collection transactions.
pub struct TuiterService {
    pub users: UserDao,
    pub tuits: TuitDao,
    pub likes: LikeDao,
    pub dislikes: DislikeDao,
    pub follows: FollowDao,
    pub bookmarks: BookmarkDao,
    pub messages: MessageDao,
}

impl TuiterService {
    /// Create the service, initializing every collection.
    pub fn new(store: Arc<dyn DocumentStore>) -> Result<Arc<Self>, TuiterError> {
        let docs = Documents::new(store);
        docs.init_schema()?;
        info!("tuiter collections initialized");

        Ok(Arc::new(Self {
            users: UserDao::new(docs.clone()),
            tuits: TuitDao::new(docs.clone()),
            likes: LikeDao::new(docs.clone()),
            dislikes: DislikeDao::new(docs.clone()),
            follows: FollowDao::new(docs.clone()),
            bookmarks: BookmarkDao::new(docs.clone()),
            messages: MessageDao::new(docs),
        }))
    }
}
