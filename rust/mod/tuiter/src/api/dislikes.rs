use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::AppState;
use crate::model::{Count, DeleteStatus, Dislike};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{uid}/dislikes", get(find_all_tuits_disliked_by_user))
        .route(
            "/users/{uid}/dislikes/{tid}",
            get(find_user_dislikes_tuit).post(user_dislikes_tuit),
        )
        .route("/users/{uid}/undislikes/{tid}", delete(user_undislikes_tuit))
        .route("/tuits/{tid}/dislikes", get(find_all_users_that_disliked_tuit))
        .route("/tuits/{tid}/dislikes/count", get(count_how_many_disliked_tuit))
}

async fn find_all_tuits_disliked_by_user(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Dislike>>, ServiceError> {
    Ok(Json(svc.dislikes.find_all_tuits_disliked_by_user(&uid).await?))
}

async fn find_all_users_that_disliked_tuit(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<Vec<Dislike>>, ServiceError> {
    Ok(Json(svc.dislikes.find_all_users_that_disliked_tuit(&tid).await?))
}

async fn count_how_many_disliked_tuit(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<Count>, ServiceError> {
    let count = svc.dislikes.count_how_many_disliked_tuit(&tid).await?;
    Ok(Json(Count { count }))
}

async fn find_user_dislikes_tuit(
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<Option<Dislike>>, ServiceError> {
    Ok(Json(svc.dislikes.find_user_dislikes_tuit(&uid, &tid).await?))
}

async fn user_dislikes_tuit(
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Dislike>), ServiceError> {
    let dislike = svc.dislikes.user_dislikes_tuit(&uid, &tid).await?;
    Ok((StatusCode::CREATED, Json(dislike)))
}

async fn user_undislikes_tuit(
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<DeleteStatus>, ServiceError> {
    Ok(Json(svc.dislikes.user_undislikes_tuit(&uid, &tid).await?))
}
