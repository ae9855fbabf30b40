//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `global_user`; empty text columns are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct GlobalUser {
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hrms_user_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub propeak_user_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub skillzengine_user_id: String,
}

/// Create/update body for a user. Same rules as [`super::OrgPayload`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub hrms_user_id: Option<String>,
    pub propeak_user_id: Option<String>,
    pub skillzengine_user_id: Option<String>,
}

impl UserPayload {
    pub fn with_id(self, id: impl Into<String>) -> GlobalUser {
        GlobalUser {
            id: id.into(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            hrms_user_id: self.hrms_user_id.unwrap_or_default(),
            propeak_user_id: self.propeak_user_id.unwrap_or_default(),
            skillzengine_user_id: self.skillzengine_user_id.unwrap_or_default(),
        }
    }
}
