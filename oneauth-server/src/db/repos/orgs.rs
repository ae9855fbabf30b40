//! Organization repository
//!
//! CRUD over `global_org`:
//! - create: INSERT ... RETURNING (id assigned by the table)
//! - list: COUNT(*) then a name-ordered page, not in a transaction
//! - update/delete: no existence check, zero affected rows is still success

use sqlx::PgPool;

use crate::models::{GlobalOrg, OrgPayload, Paginated, Pagination};
use super::{parse_id, DbError};

const RESOURCE: &str = "Org";

/// Organization repository
pub struct OrgRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> OrgRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new organization and return it with its assigned id.
    pub async fn create(&self, payload: OrgPayload) -> Result<GlobalOrg, DbError> {
        let org: GlobalOrg = sqlx::query_as(
            r#"
            INSERT INTO global_org (name, hrms_org_id, propeak_org_id, skillzengine_org_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id::text AS id,
                      COALESCE(name, '') AS name,
                      COALESCE(hrms_org_id, '') AS hrms_org_id,
                      COALESCE(propeak_org_id, '') AS propeak_org_id,
                      COALESCE(skillzengine_org_id, '') AS skillzengine_org_id
            "#,
        )
        .bind(payload.name.unwrap_or_default())
        .bind(payload.hrms_org_id.unwrap_or_default())
        .bind(payload.propeak_org_id.unwrap_or_default())
        .bind(payload.skillzengine_org_id.unwrap_or_default())
        .fetch_one(self.pool)
        .await?;

        Ok(org)
    }

    /// List organizations ordered by name.
    ///
    /// The total comes from a separate COUNT(*); a concurrent write between
    /// the two statements can make it disagree with the returned page.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<GlobalOrg>, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM global_org")
            .fetch_one(self.pool)
            .await?;

        let items: Vec<GlobalOrg> = sqlx::query_as(
            r#"
            SELECT id::text AS id,
                   COALESCE(name, '') AS name,
                   COALESCE(hrms_org_id, '') AS hrms_org_id,
                   COALESCE(propeak_org_id, '') AS propeak_org_id,
                   COALESCE(skillzengine_org_id, '') AS skillzengine_org_id
            FROM global_org
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(Paginated {
            items,
            total,
            page: page.page,
            limit: page.limit,
        })
    }

    /// Get a single organization by id.
    pub async fn get(&self, id: &str) -> Result<GlobalOrg, DbError> {
        let not_found = || DbError::NotFound {
            resource: RESOURCE,
            id: id.to_owned(),
        };
        let key = parse_id(id).ok_or_else(not_found)?;

        sqlx::query_as::<_, GlobalOrg>(
            r#"
            SELECT id::text AS id,
                   COALESCE(name, '') AS name,
                   COALESCE(hrms_org_id, '') AS hrms_org_id,
                   COALESCE(propeak_org_id, '') AS propeak_org_id,
                   COALESCE(skillzengine_org_id, '') AS skillzengine_org_id
            FROM global_org
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(not_found)
    }

    /// Replace every mutable field of an organization.
    ///
    /// Returns the payload stamped with `id` whether or not a row matched.
    pub async fn update(&self, id: &str, payload: OrgPayload) -> Result<GlobalOrg, DbError> {
        let org = payload.with_id(id);
        let Some(key) = parse_id(id) else {
            tracing::debug!(id, "org update on non-uuid id, nothing to match");
            return Ok(org);
        };

        let result = sqlx::query(
            r#"
            UPDATE global_org
            SET name = $1, hrms_org_id = $2, propeak_org_id = $3, skillzengine_org_id = $4
            WHERE id = $5
            "#,
        )
        .bind(&org.name)
        .bind(&org.hrms_org_id)
        .bind(&org.propeak_org_id)
        .bind(&org.skillzengine_org_id)
        .bind(key)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "org update matched no rows");
        }

        Ok(org)
    }

    /// Delete an organization by id (idempotent).
    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        let Some(key) = parse_id(id) else {
            return Ok(());
        };

        sqlx::query("DELETE FROM global_org WHERE id = $1")
            .bind(key)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
