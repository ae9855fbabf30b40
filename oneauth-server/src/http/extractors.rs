//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::models::{Pagination, PaginationParams};
use super::error::ApiError;

/// JSON body that rejects with a 400 `Invalid JSON` on any parse failure.
///
/// Axum's own `Json` answers 415/422 for some cases; every one of them is a
/// bad request here, and it is raised before the handler runs.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected request body");
            ApiError::invalid_json()
        })?;
        Ok(Self(value))
    }
}

/// Page/limit from the query string; never rejects.
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<PaginationParams>::from_request_parts(parts, state).await {
            Ok(Query(params)) => params,
            Err(rejection) => {
                tracing::debug!(%rejection, "unparseable pagination query, using defaults");
                PaginationParams::default()
            }
        };
        Ok(Self(Pagination::from(params)))
    }
}
