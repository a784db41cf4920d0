use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::AppState;
use crate::model::{Bookmark, DeleteStatus};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{uid}/bookmarks", get(find_all_tuits_bookmarked_by_user))
        .route(
            "/users/{uid}/bookmarks/{tid}",
            post(user_bookmarks_tuit).delete(user_unbookmarks_tuit),
        )
}

async fn find_all_tuits_bookmarked_by_user(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Bookmark>>, ServiceError> {
    Ok(Json(svc.bookmarks.find_all_tuits_bookmarked_by_user(&uid).await?))
}

async fn user_bookmarks_tuit(
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Bookmark>), ServiceError> {
    let bookmark = svc.bookmarks.user_bookmarks_tuit(&uid, &tid).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

async fn user_unbookmarks_tuit(
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<DeleteStatus>, ServiceError> {
    Ok(Json(svc.bookmarks.user_unbookmarks_tuit(&uid, &tid).await?))
}
