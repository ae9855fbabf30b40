//! User repository
//!
//! CRUD over `global_user`. Same statement shapes as the org repository;
//! users carry an extra `email` column and no link to organizations.

use sqlx::PgPool;

use crate::models::{GlobalUser, Paginated, Pagination, UserPayload};
use super::{parse_id, DbError};

const RESOURCE: &str = "User";

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return it with its assigned id.
    pub async fn create(&self, payload: UserPayload) -> Result<GlobalUser, DbError> {
        let user: GlobalUser = sqlx::query_as(
            r#"
            INSERT INTO global_user (name, email, hrms_user_id, propeak_user_id, skillzengine_user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id::text AS id,
                      COALESCE(name, '') AS name,
                      COALESCE(email, '') AS email,
                      COALESCE(hrms_user_id, '') AS hrms_user_id,
                      COALESCE(propeak_user_id, '') AS propeak_user_id,
                      COALESCE(skillzengine_user_id, '') AS skillzengine_user_id
            "#,
        )
        .bind(payload.name.unwrap_or_default())
        .bind(payload.email.unwrap_or_default())
        .bind(payload.hrms_user_id.unwrap_or_default())
        .bind(payload.propeak_user_id.unwrap_or_default())
        .bind(payload.skillzengine_user_id.unwrap_or_default())
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// List users ordered by name, with an independently counted total.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<GlobalUser>, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM global_user")
            .fetch_one(self.pool)
            .await?;

        let items: Vec<GlobalUser> = sqlx::query_as(
            r#"
            SELECT id::text AS id,
                   COALESCE(name, '') AS name,
                   COALESCE(email, '') AS email,
                   COALESCE(hrms_user_id, '') AS hrms_user_id,
                   COALESCE(propeak_user_id, '') AS propeak_user_id,
                   COALESCE(skillzengine_user_id, '') AS skillzengine_user_id
            FROM global_user
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

    pub async fn get(&self, id: &str) -> Result<GlobalUser, DbError> {
        let not_found = || DbError::NotFound {
            resource: RESOURCE,
            id: id.to_owned(),
        };
        let key = parse_id(id).ok_or_else(not_found)?;

        sqlx::query_as::<_, GlobalUser>(
            r#"
            SELECT id::text AS id,
                   COALESCE(name, '') AS name,
                   COALESCE(email, '') AS email,
                   COALESCE(hrms_user_id, '') AS hrms_user_id,
                   COALESCE(propeak_user_id, '') AS propeak_user_id,
                   COALESCE(skillzengine_user_id, '') AS skillzengine_user_id
            FROM global_user
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(not_found)
    }

    /// Replace every mutable field of a user; a missing id is not an error.
    pub async fn update(&self, id: &str, payload: UserPayload) -> Result<GlobalUser, DbError> {
        let user = payload.with_id(id);
        let Some(key) = parse_id(id) else {
            tracing::debug!(id, "user update on non-uuid id, nothing to match");
            return Ok(user);
        };

        let result = sqlx::query(
            r#"
            UPDATE global_user
            SET name = $1, email = $2, hrms_user_id = $3, propeak_user_id = $4, skillzengine_user_id = $5
            WHERE id = $6
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.hrms_user_id)
        .bind(&user.propeak_user_id)
        .bind(&user.skillzengine_user_id)
        .bind(key)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "user update matched no rows");
        }

        Ok(user)
    }

    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        let Some(key) = parse_id(id) else {
            return Ok(());
        };

        sqlx::query("DELETE FROM global_user WHERE id = $1")
            .bind(key)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
