//! oneauth-server: global organization and user registry over HTTP
//!
//! Exposes paginated CRUD for the `global_org` and `global_user` tables.
//! Each record mirrors identifiers held by three external systems
//! (HRMS, Propeak, Skillzengine); the server stores them verbatim.
//!
//! - [`db`]: connection pool and repositories
//! - [`models`]: request payloads, records, pagination
//! - [`http`]: axum server, routes, and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{connect, DbConfig};
pub use http::{build_router, run_server, AppState, ServerConfig};
