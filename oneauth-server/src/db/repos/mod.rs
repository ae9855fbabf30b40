//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and maps one operation to one
//! parameterized statement.
//!
//! - `id` is a `uuid` column. Path ids are parsed first and compared as
//!   `id = $n` so lookups use the primary key; a string that is not a uuid
//!   cannot name a row.
//! - Text columns are written as `""` when absent and read through
//!   `COALESCE(col, '')`.

pub mod orgs;
pub mod users;

pub use orgs::OrgRepo;
pub use users::UserRepo;

use uuid::Uuid;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Parse a path id; `None` means no row can match it.
pub(crate) fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}
