use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::AppState;
use crate::model::{DeleteStatus, Follow};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{uid}/followinglist", get(user_following_list))
        .route("/users/{uid}/followedlist", get(user_followed_list))
        .route("/users/{uid}/users/{auid}", post(user_follows).delete(user_unfollows))
}

async fn user_following_list(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Follow>>, ServiceError> {
    Ok(Json(svc.follows.user_following_list(&uid).await?))
}

async fn user_followed_list(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Follow>>, ServiceError> {
    Ok(Json(svc.follows.user_followed_list(&uid).await?))
}

async fn user_follows(
    State(svc): State<AppState>,
    Path((uid, auid)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Follow>), ServiceError> {
    let follow = svc.follows.user_follows(&uid, &auid).await?;
    Ok((StatusCode::CREATED, Json(follow)))
}

async fn user_unfollows(
    State(svc): State<AppState>,
    Path((uid, auid)): Path<(String, String)>,
) -> Result<Json<DeleteStatus>, ServiceError> {
    Ok(Json(svc.follows.user_unfollows(&uid, &auid).await?))
}
