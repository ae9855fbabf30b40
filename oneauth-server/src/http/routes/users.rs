//! User endpoints
//!
//! Single-user responses are the bare user object, and delete answers
//! 204 with no body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PageQuery};
use crate::http::server::AppState;
use crate::models::{GlobalUser, PageResponse, UserPayload};

/// POST /api/users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<(StatusCode, Json<GlobalUser>), ApiError> {
    let user = UserRepo::new(&state.pool).create(payload).await?;
    tracing::info!(id = %user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users - list users with pagination
async fn list_users(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<PageResponse<GlobalUser>>, ApiError> {
    let result = UserRepo::new(&state.pool).list(page).await?;
    Ok(Json(PageResponse::from(result)))
}

/// GET /api/users/{id}
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GlobalUser>, ApiError> {
    let user = UserRepo::new(&state.pool).get(&id).await?;
    Ok(Json(user))
}

/// PUT /api/users/{id}
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Json<GlobalUser>, ApiError> {
    let user = UserRepo::new(&state.pool).update(&id, payload).await?;
    Ok(Json(user))
}

/// DELETE /api/users/{id}
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    UserRepo::new(&state.pool).delete(&id).await?;
    tracing::info!(id = %id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
