//! PostgreSQL implementation of EntryRepository.
//!
//! Drink entries are append-mostly rows; the only targeted delete removes the
//! newest row matching a (user, kind, size) triple.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, UserId};
use crate::domain::tally::{DrinkEntry, DrinkKind, DrinkSize};
use crate::ports::{EntryRepository, RawEntryRow};

/// PostgreSQL implementation of EntryRepository.
#[derive(Clone)]
pub struct PostgresEntryRepository {
    pool: PgPool,
}

impl PostgresEntryRepository {
    /// Creates a new PostgresEntryRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PostgresEntryRepository {
    async fn insert(&self, entry: &DrinkEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO drink_entries (id, user_id, kind, size, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(entry.user_id.as_uuid())
        .bind(entry.kind.as_str())
        .bind(entry.size.as_str())
        .bind(entry.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &entry.user_id))?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<RawEntryRow>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, kind, size
            FROM drink_entries
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch entries: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(row_to_raw_entry).collect())
    }

    async fn list_all(&self) -> Result<Vec<RawEntryRow>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, kind, size
            FROM drink_entries
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch entries: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(row_to_raw_entry).collect())
    }

    async fn delete_latest_matching(
        &self,
        user_id: &UserId,
        kind: DrinkKind,
        size: DrinkSize,
    ) -> Result<Option<EntryId>, DomainError> {
        // Newest-first by created_at, id as a tiebreaker so concurrent inserts
        // with equal timestamps still delete deterministically.
        let row = sqlx::query(
            r#"
            DELETE FROM drink_entries
            WHERE id = (
                SELECT id FROM drink_entries
                WHERE user_id = $1 AND kind = $2 AND size = $3
                ORDER BY created_at DESC, id DESC
                LIMIT 1
            )
            RETURNING id
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(kind.as_str())
        .bind(size.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to delete entry: {}", e),
            )
        })?;

        Ok(row.map(|r| EntryId::from_uuid(r.get::<Uuid, _>("id"))))
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM drink_entries WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete entries: {}", e),
                )
            })?;

        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM drink_entries")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to reset entries: {}", e),
                )
            })?;

        Ok(result.rows_affected())
    }
}

fn row_to_raw_entry(row: sqlx::postgres::PgRow) -> RawEntryRow {
    RawEntryRow {
        user_id: UserId::from_uuid(row.get("user_id")),
        kind: row.get("kind"),
        size: row.get("size"),
    }
}

/// Postgres error code for foreign key violations.
const FK_VIOLATION: &str = "23503";

/// An insert that trips the `drink_entries.user_id` foreign key means the
/// user has no profile row, which is a client-visible condition, not a
/// storage fault.
fn map_insert_error(e: sqlx::Error, user_id: &UserId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(FK_VIOLATION) {
            return DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("No profile for user: {}", user_id),
            );
        }
    }

    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to insert entry: {}", e),
    )
}
