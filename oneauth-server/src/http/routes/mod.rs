//! Route handlers organized by resource

pub mod root;
pub mod orgs;
pub mod users;
