//! Organization endpoints
//!
//! Responses are wrapped as `{success, org, message}`; the list endpoint
//! uses the shared `{data, total, pages, page}` shape.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::OrgRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PageQuery};
use crate::http::server::AppState;
use crate::models::{GlobalOrg, OrgPayload, PageResponse};

/// Single-org response envelope
#[derive(Serialize)]
pub struct OrgEnvelope {
    pub success: bool,
    pub org: GlobalOrg,
    pub message: &'static str,
}

impl OrgEnvelope {
    fn new(org: GlobalOrg, message: &'static str) -> Self {
        Self {
            success: true,
            org,
            message,
        }
    }
}

/// Delete acknowledgement
#[derive(Serialize)]
pub struct DeletedEnvelope {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/orgs - create an organization
async fn create_org(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<OrgPayload>,
) -> Result<(StatusCode, Json<OrgEnvelope>), ApiError> {
    let org = OrgRepo::new(&state.pool).create(payload).await?;
    tracing::info!(id = %org.id, "org created");

    Ok((
        StatusCode::CREATED,
        Json(OrgEnvelope::new(org, "Org added successfully!")),
    ))
}

/// GET /api/orgs - list organizations with pagination
async fn list_orgs(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<PageResponse<GlobalOrg>>, ApiError> {
    let result = OrgRepo::new(&state.pool).list(page).await?;
    Ok(Json(PageResponse::from(result)))
}

/// GET /api/orgs/{id} - get a single organization
async fn get_org(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrgEnvelope>, ApiError> {
    let org = OrgRepo::new(&state.pool).get(&id).await?;
    Ok(Json(OrgEnvelope::new(org, "Org fetched successfully!")))
}

/// PUT /api/orgs/{id} - replace an organization
async fn update_org(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<OrgPayload>,
) -> Result<Json<OrgEnvelope>, ApiError> {
    let org = OrgRepo::new(&state.pool).update(&id, payload).await?;
    Ok(Json(OrgEnvelope::new(org, "Org updated successfully!")))
}

/// DELETE /api/orgs/{id} - delete an organization
async fn delete_org(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedEnvelope>, ApiError> {
    OrgRepo::new(&state.pool).delete(&id).await?;
    tracing::info!(id = %id, "org deleted");

    Ok(Json(DeletedEnvelope {
        success: true,
        message: "Org deleted successfully!",
    }))
}

/// Organization routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/orgs", get(list_orgs).post(create_org))
        .route(
            "/api/orgs/{id}",
            get(get_org).put(update_org).delete(delete_org),
        )
}
