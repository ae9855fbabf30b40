//! Domain models
//!
//! Request payloads carry only the mutable fields; records carry the
//! storage-assigned `id` as well. Serde does the type checking; no further
//! validation is applied to names or foreign-system identifiers.

pub mod org;
pub mod user;
pub mod pagination;

pub use org::{GlobalOrg, OrgPayload};
pub use user::{GlobalUser, UserPayload};
pub use pagination::{PageResponse, Paginated, Pagination, PaginationParams};
