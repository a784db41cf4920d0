use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::AppState;
use crate::model::{Count, DeleteStatus, Like};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{uid}/likes", get(find_all_tuits_liked_by_user))
        .route(
            "/users/{uid}/likes/{tid}",
            get(find_user_likes_tuit).post(user_likes_tuit),
        )
        .route("/users/{uid}/unlikes/{tid}", delete(user_unlikes_tuit))
        .route("/tuits/{tid}/likes", get(find_all_users_that_liked_tuit))
        .route("/tuits/{tid}/likes/count", get(count_how_many_liked_tuit))
}

async fn find_all_tuits_liked_by_user(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Like>>, ServiceError> {
    Ok(Json(svc.likes.find_all_tuits_liked_by_user(&uid).await?))
}

async fn find_all_users_that_liked_tuit(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<Vec<Like>>, ServiceError> {
    Ok(Json(svc.likes.find_all_users_that_liked_tuit(&tid).await?))
}

async fn count_how_many_liked_tuit(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<Count>, ServiceError> {
    let count = svc.likes.count_how_many_liked_tuit(&tid).await?;
    Ok(Json(Count { count }))
}

/// `null` when the user has not liked the tuit.
async fn find_user_likes_tuit(
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<Option<Like>>, ServiceError> {
    Ok(Json(svc.likes.find_user_likes_tuit(&uid, &tid).await?))
}

async fn user_likes_tuit(
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Like>), ServiceError> {
    let like = svc.likes.user_likes_tuit(&uid, &tid).await?;
    Ok((StatusCode::CREATED, Json(like)))
}

async fn user_unlikes_tuit(
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<DeleteStatus>, ServiceError> {
    Ok(Json(svc.likes.user_unlikes_tuit(&uid, &tid).await?))
}
