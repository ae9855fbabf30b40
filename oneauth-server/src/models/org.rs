//! Organization records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `global_org`
///
/// Text columns are read through `COALESCE(col, '')`, so `NULL` and `""`
/// are the same value here and both are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct GlobalOrg {
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hrms_org_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub propeak_org_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub skillzengine_org_id: String,
}

/// Create/update body for an organization.
///
/// Every field is optional and a missing one is stored as `""`. Unknown keys
/// (including `id`) are ignored, so a client can never choose the identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrgPayload {
    pub name: Option<String>,
    pub hrms_org_id: Option<String>,
    pub propeak_org_id: Option<String>,
    pub skillzengine_org_id: Option<String>,
}

impl OrgPayload {
    /// Attach a storage-assigned id, filling missing fields with `""`.
    pub fn with_id(self, id: impl Into<String>) -> GlobalOrg {
        GlobalOrg {
            id: id.into(),
            name: self.name.unwrap_or_default(),
            hrms_org_id: self.hrms_org_id.unwrap_or_default(),
            propeak_org_id: self.propeak_org_id.unwrap_or_default(),
            skillzengine_org_id: self.skillzengine_org_id.unwrap_or_default(),
        }
    }
}
