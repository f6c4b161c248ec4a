use sqlx::{postgres::PgRow, FromRow, Row};

use crate::application::dto::paste_dto::{PasteDTO, PasteSummaryDTO};

impl FromRow<'_, PgRow> for PasteDTO {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let views: i32 = row.try_get("views")?;

        Ok(PasteDTO {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            language: row.try_get("language")?,
            expires_at: row.try_get("expires_at")?,
            burn_after_read: row.try_get("burn_after_read")?,
            is_private: row.try_get("is_private")?,
            views: views.max(0) as u64,
            created_at: row.try_get("created_at")?,
            deleted: row.try_get("deleted")?,
        })
    }
}

impl FromRow<'_, PgRow> for PasteSummaryDTO {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let views: i32 = row.try_get("views")?;

        Ok(PasteSummaryDTO {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            language: row.try_get("language")?,
            created_at: row.try_get("created_at")?,
            views: views.max(0) as u64,
            is_private: row.try_get("is_private")?,
            burn_after_read: row.try_get("burn_after_read")?,
            expires_at: row.try_get("expires_at")?,
            truncated: row.try_get("truncated")?,
        })
    }
}
