use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::AppState;
use crate::model::{CreateTuit, DeleteStatus, Tuit, UpdateStatus, UpdateTuit};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tuits", get(find_all_tuits))
        .route(
            "/tuits/{tid}",
            get(find_tuit_by_id).put(update_tuit).delete(delete_tuit),
        )
        .route("/users/{uid}/tuits", get(find_tuits_by_user).post(create_tuit))
}

async fn find_all_tuits(State(svc): State<AppState>) -> Result<Json<Vec<Tuit>>, ServiceError> {
    Ok(Json(svc.tuits.find_all_tuits().await?))
}

async fn find_tuit_by_id(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<Tuit>, ServiceError> {
    Ok(Json(svc.tuits.find_tuit_by_id(&tid).await?))
}

async fn find_tuits_by_user(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Tuit>>, ServiceError> {
    Ok(Json(svc.tuits.find_tuits_by_user(&uid).await?))
}

async fn create_tuit(
    State(svc): State<AppState>,
    Path(uid): Path<String>,
    Json(input): Json<CreateTuit>,
) -> Result<(StatusCode, Json<Tuit>), ServiceError> {
    let tuit = svc.tuits.create_tuit(&uid, input).await?;
    Ok((StatusCode::CREATED, Json(tuit)))
}

async fn update_tuit(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
    Json(patch): Json<UpdateTuit>,
) -> Result<Json<UpdateStatus>, ServiceError> {
    Ok(Json(svc.tuits.update_tuit(&tid, patch).await?))
}

async fn delete_tuit(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<DeleteStatus>, ServiceError> {
    Ok(Json(svc.tuits.delete_tuit(&tid).await?))
}
