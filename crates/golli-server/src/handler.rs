use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

use golli_ingest::Ingest;
use golli_store::EntityRepository;
use golli_types::{EntityId, Lesson, Tolli, User};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    Ok(Json(json!({
        "name": "golli-server",
        "version": env!("CARGO_PKG_VERSION"),
        "entities": {
            "users": state.users.len()?,
            "lessons": state.lessons.len()?,
            "tolli": state.tolli.len()?,
        },
    })))
}

/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<Response> {
    let id: EntityId = raw_id.parse().map_err(|_| ServerError::InvalidId(raw_id))?;
    match state.users.get(id)? {
        Some(user) => json_response(&user),
        None => Err(ServerError::NotFound { kind: "user", id }),
    }
}

/// `POST /users/`
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> ServerResult<Response> {
    create::<User>(state.users.as_ref(), &body)
}

/// `POST /lessons/`
pub async fn create_lesson(State(state): State<AppState>, body: Bytes) -> ServerResult<Response> {
    create::<Lesson>(state.lessons.as_ref(), &body)
}

/// `POST /tolli/`
pub async fn create_tolli(State(state): State<AppState>, body: Bytes) -> ServerResult<Response> {
    create::<Tolli>(state.tolli.as_ref(), &body)
}

fn create<T: Ingest + Serialize>(repo: &dyn EntityRepository<T>, body: &[u8]) -> ServerResult<Response> {
    let entity: T = golli_ingest::ingest(body)?;
    let response = json_response(&entity)?;
    let id = entity.id();
    repo.add(entity)?;
    tracing::info!(kind = T::KIND, id, "entity created");
    Ok(response)
}

fn json_response<T: Serialize>(value: &T) -> ServerResult<Response> {
    let body = serde_json::to_vec(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
