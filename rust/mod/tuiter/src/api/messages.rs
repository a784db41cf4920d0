use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::AppState;
use crate::model::{DeleteStatus, Message, MessageBody, NewMessage};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{uid}/messages/sent", get(find_all_messages_sent_by_user))
        .route(
            "/users/{uid}/messages/received",
            get(find_all_messages_received_by_user),
        )
        .route("/users/{uid}/messages/sent/{auid}", post(user_messages_user))
        .route("/users/{uid}/messages/{mid}", delete(user_deletes_message))
}

async fn find_all_messages_sent_by_user(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Message>>, ServiceError> {
    Ok(Json(svc.messages.find_all_messages_sent_by_user(&uid).await?))
}

async fn find_all_messages_received_by_user(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Message>>, ServiceError> {
    Ok(Json(svc.messages.find_all_messages_received_by_user(&uid).await?))
}

/// `uid` sends to `auid`. Any `from` or `to` in the body is ignored.
async fn user_messages_user(
    State(svc): State<AppState>,
    Path((uid, auid)): Path<(String, String)>,
    Json(body): Json<MessageBody>,
) -> Result<(StatusCode, Json<Message>), ServiceError> {
    let message = svc
        .messages
        .user_messages_user(NewMessage::new(&uid, &auid, body))
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}

async fn user_deletes_message(
    State(svc): State<AppState>,
    Path((uid, mid)): Path<(String, String)>,
) -> Result<Json<DeleteStatus>, ServiceError> {
    Ok(Json(svc.messages.user_deletes_message(&uid, &mid).await?))
}
