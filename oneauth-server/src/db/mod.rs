//! Database layer - connection pool and repositories
//!
//! - One shared `PgPool`, passed explicitly into each repository
//! - Every repository call is a single round trip (list issues two)
//! - No existence checks before update/delete; the tables are the authority

pub mod pool;
pub mod repos;

pub use pool::{connect, ConnectError, DbConfig, DEFAULT_DATABASE_URL};
pub use repos::*;
