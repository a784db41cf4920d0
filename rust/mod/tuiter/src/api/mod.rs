mod bookmarks;
mod dislikes;
mod follows;
mod likes;
mod messages;
mod tuits;
mod users;


use std::sync::Arc;

use axum::Router;

use crate::service::TuiterService;

/// Shared application state.
pub type AppState = Arc<TuiterService>;

/// Build the complete tuiter API router.
///
/// Paths are absolute; the binary merges this router at the root.
pub fn build_router(svc: Arc<TuiterService>) -> Router {
    Router::new()
        .merge(users::routes())
        .merge(tuits::routes())
        .merge(likes::routes())
        .merge(dislikes::routes())
        .merge(follows::routes())
        .merge(bookmarks::routes())
        .merge(messages::routes())
        .with_state(svc)
}
