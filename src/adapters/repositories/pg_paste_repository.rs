use async_trait::async_trait;
use sqlx::query_as;

use crate::{
    application::{
        dto::paste_dto::{PasteDTO, PasteSummaryDTO},
        error::ApplicationError,
        repositories::paste_repository::PasteRepository,
    },
    domain::{
        config::server::BurnPolicy,
        models::paste::{NewPaste, Paste, PasteSummary, PREVIEW_CHARS},
    },
};

const PASTE_COLUMNS: &str =
    "id, content, language, expires_at, burn_after_read, is_private, views, created_at, deleted";

pub struct PgPasteRepository {
    pool: sqlx::PgPool,
}

impl PgPasteRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `pastes` table and its listing index when missing.
    pub async fn ensure_schema(&self) -> Result<(), ApplicationError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pastes (
                id TEXT PRIMARY KEY,
                content TEXT NOT NULL,
                language TEXT NOT NULL DEFAULT 'plain',
                expires_at TIMESTAMPTZ,
                burn_after_read BOOLEAN NOT NULL DEFAULT FALSE,
                is_private BOOLEAN NOT NULL DEFAULT FALSE,
                views INTEGER NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                deleted BOOLEAN NOT NULL DEFAULT FALSE
            )
        "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS pastes_created_at_idx ON pastes (created_at DESC)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl PasteRepository for PgPasteRepository {
    async fn insert_paste(
        &self,
        id: &str,
        paste: &NewPaste,
    ) -> Result<Option<Paste>, ApplicationError> {
        // Expiry is computed from the database clock, the same clock reads compare against.
        let query = format!(
            r#"
            INSERT INTO pastes (
                id, content, language, expires_at, burn_after_read, is_private, views
            )
            VALUES (
                $1, $2, $3,
                CASE WHEN $4::BIGINT IS NULL THEN NULL
                     ELSE NOW() + $4::BIGINT * INTERVAL '1 millisecond' END,
                $5, $6, 0
            )
            ON CONFLICT (id) DO NOTHING
            RETURNING {PASTE_COLUMNS}
        "#
        );

        let created = query_as::<_, PasteDTO>(&query)
            .bind(id)
            .bind(&paste.content)
            .bind(&paste.language)
            .bind(paste.expires_in_ms)
            .bind(paste.burn_after_read)
            .bind(paste.is_private)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(created.map(Into::into))
    }

    async fn read_paste(&self, id: &str, policy: BurnPolicy) -> Result<Paste, ApplicationError> {
        // `views` on the right-hand side is the pre-increment value.
        let query = format!(
            r#"
            UPDATE pastes
            SET views = views + 1,
                deleted = burn_after_read AND views >= $2
            WHERE id = $1
              AND NOT deleted
              AND (expires_at IS NULL OR expires_at > NOW())
            RETURNING {PASTE_COLUMNS}
        "#
        );

        let threshold = i32::try_from(policy.views_threshold()).unwrap_or(i32::MAX);

        let updated = query_as::<_, PasteDTO>(&query)
            .bind(id)
            .bind(threshold)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        updated.map(Into::into).ok_or(ApplicationError::NotFound)
    }

    async fn list_pastes(&self, limit: i64) -> Result<Vec<PasteSummary>, ApplicationError> {
        let query = r#"
            SELECT
                id,
                LEFT(content, $1) AS content,
                char_length(content) > $1 AS truncated,
                language,
                created_at,
                views,
                is_private,
                burn_after_read,
                expires_at
            FROM pastes
            WHERE NOT deleted
              AND (expires_at IS NULL OR expires_at > NOW())
            ORDER BY created_at DESC, id ASC
            LIMIT $2
        "#;

        let rows: Vec<PasteSummaryDTO> = query_as::<_, PasteSummaryDTO>(query)
            .bind(PREVIEW_CHARS as i32)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|dto| dto.into()).collect())
    }

    async fn delete_paste(&self, id: &str) -> Result<(), ApplicationError> {
        let query = "UPDATE pastes SET deleted = TRUE WHERE id = $1 AND NOT deleted RETURNING id";

        let deleted: Option<(String,)> = sqlx::query_as(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        deleted.map(|_| ()).ok_or(ApplicationError::NotFound)
    }

    async fn ping(&self) -> Result<(), ApplicationError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
