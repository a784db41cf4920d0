use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::AppState;
use crate::model::{CreateUser, Credentials, DeleteStatus, UpdateStatus, UpdateUser, User};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(find_all_users).post(create_user).delete(delete_all_users))
        .route(
            "/users/{uid}",
            get(find_user_by_id).put(update_user).delete(delete_user),
        )
        .route("/users/username/{username}", delete(delete_users_by_username))
        .route("/login", post(login))
}

async fn find_all_users(State(svc): State<AppState>) -> Result<Json<Vec<User>>, ServiceError> {
    Ok(Json(svc.users.find_all_users().await?))
}

async fn find_user_by_id(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<User>, ServiceError> {
    Ok(Json(svc.users.find_user_by_id(&uid).await?))
}

async fn create_user(
    State(svc): State<AppState>,
    Json(input): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), ServiceError> {
    let user = svc.users.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
    Json(patch): Json<UpdateUser>,
) -> Result<Json<UpdateStatus>, ServiceError> {
    Ok(Json(svc.users.update_user(&uid, patch).await?))
}

async fn delete_user(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<DeleteStatus>, ServiceError> {
    Ok(Json(svc.users.delete_user(&uid).await?))
}

async fn delete_all_users(State(svc): State<AppState>) -> Result<Json<DeleteStatus>, ServiceError> {
    Ok(Json(svc.users.delete_all_users().await?))
}

async fn delete_users_by_username(
    State(svc): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<DeleteStatus>, ServiceError> {
    Ok(Json(svc.users.delete_users_by_username(&username).await?))
}

/// The matching user, or `null` when the credentials match nobody.
async fn login(
    State(svc): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Json<Option<User>>, ServiceError> {
    let user = svc
        .users
        .find_user_by_credentials(&creds.username, &creds.password)
        .await?;
    Ok(Json(user))
}
