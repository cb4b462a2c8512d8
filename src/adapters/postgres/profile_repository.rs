//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::profile::{Profile, Role};
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new PostgresProfileRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn upsert(&self, profile: &Profile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, email, role, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id)
            DO UPDATE SET email = EXCLUDED.email, role = EXCLUDED.role
            "#,
        )
        .bind(profile.user_id.as_uuid())
        .bind(profile.email.as_deref())
        .bind(profile.role.as_str())
        .bind(profile.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert profile: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, email, role, created_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch profile: {}", e),
            )
        })?;

        row.map(row_to_profile).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Profile>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, email, role, created_at
            FROM profiles
            ORDER BY email NULLS LAST
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list profiles: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_profile).collect()
    }

    async fn update_role(&self, user_id: &UserId, role: Role) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE profiles SET role = $2 WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to update role: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("No profile for user: {}", user_id),
            ));
        }

        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError> {
        // No rows_affected check: deleting an absent profile is fine, the
        // caller may be re-running a partially failed cascade.
        sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete profile: {}", e),
                )
            })?;

        Ok(())
    }
}

fn row_to_profile(row: sqlx::postgres::PgRow) -> Result<Profile, DomainError> {
    let role_str: String = row.get("role");

    Ok(Profile {
        user_id: UserId::from_uuid(row.get("user_id")),
        email: row.get("email"),
        role: decode_stored_role(&role_str)?,
        created_at: Timestamp::from_datetime(row.get("created_at")),
    })
}

/// Roles gate authorization, so a value outside the known set is a corrupt
/// row that must surface as an error rather than be read as some role.
fn decode_stored_role(raw: &str) -> Result<Role, DomainError> {
    Role::parse(raw).ok_or_else(|| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Unknown role in storage: {}", raw),
        )
    })
}
