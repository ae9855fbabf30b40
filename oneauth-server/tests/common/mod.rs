//! Shared fixture for database-backed tests.
//!
//! Each test gets its own schema (selected through `search_path`) holding
//! fresh `global_org` / `global_user` tables, so tests can run in parallel
//! and count rows without seeing each other. Text columns are
//! `NOT NULL DEFAULT ''`, matching tables that have only ever held `""` for
//! absent values.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p oneauth-server -- --ignored

#![allow(dead_code)]

use std::str::FromStr;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use oneauth_server::{build_router, AppState, ServerConfig};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

const CREATE_ORG_TABLE: &str = r#"
    CREATE TABLE global_org (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL DEFAULT '',
        hrms_org_id TEXT NOT NULL DEFAULT '',
        propeak_org_id TEXT NOT NULL DEFAULT '',
        skillzengine_org_id TEXT NOT NULL DEFAULT ''
    )
"#;

const CREATE_USER_TABLE: &str = r#"
    CREATE TABLE global_user (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL DEFAULT '',
        email TEXT NOT NULL DEFAULT '',
        hrms_user_id TEXT NOT NULL DEFAULT '',
        propeak_user_id TEXT NOT NULL DEFAULT '',
        skillzengine_user_id TEXT NOT NULL DEFAULT ''
    )
"#;

pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("admin connection failed");

        let schema = format!("oneauth_test_{}", Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&admin)
            .await
            .expect("create schema failed");

        let options = PgConnectOptions::from_str(&url)
            .expect("invalid DATABASE_URL")
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("pool creation failed");

        for ddl in [CREATE_ORG_TABLE, CREATE_USER_TABLE] {
            sqlx::query(ddl).execute(&pool).await.expect("create table failed");
        }

        Self {
            pool,
            admin,
            schema,
        }
    }

    pub fn app(&self) -> Router {
        build_router(AppState::new(self.pool.clone()), &ServerConfig::default())
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop schema failed");
    }
}

/// Send a request through the router, returning status and parsed JSON
/// (`Null` for empty or non-JSON bodies).
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).expect("request"))
        .await
        .expect("infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}
