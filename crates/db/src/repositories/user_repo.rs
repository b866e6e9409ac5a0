//! Repository for the `users` table.

use keygate_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, username, password_hash, role, refresh_token_hash, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate username violates `uq_users_username` and surfaces as a
    /// database error (PostgreSQL 23505).
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(input.role.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find the user holding the given refresh token digest.
    ///
    /// At most one row can match: each user holds a single digest, and
    /// digests of distinct tokens collide with negligible probability.
    pub async fn find_by_refresh_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE refresh_token_hash = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Store a new refresh token digest, replacing any previous one.
    pub async fn set_refresh_token(
        pool: &PgPool,
        id: DbId,
        hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET refresh_token_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(hash)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Clear the stored refresh token digest. Returns `true` if a digest was
    /// actually cleared.
    pub async fn clear_refresh_token(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET refresh_token_hash = NULL, updated_at = NOW()
             WHERE id = $1 AND refresh_token_hash IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
