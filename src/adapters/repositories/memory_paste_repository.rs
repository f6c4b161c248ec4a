use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::{
    application::{error::ApplicationError, repositories::paste_repository::PasteRepository},
    domain::{
        config::server::BurnPolicy,
        models::paste::{preview_content, NewPaste, Paste, PasteSummary},
    },
};

/// Process-local paste store with the same semantics as the PostgreSQL table.
#[derive(Default)]
pub struct InMemoryPasteRepository {
    pastes: Mutex<Vec<Paste>>,
}

impl InMemoryPasteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> Result<MutexGuard<'_, Vec<Paste>>, ApplicationError> {
        self.pastes
            .lock()
            .map_err(|_| ApplicationError::InternalError("paste store poisoned".to_string()))
    }
}

#[async_trait]
impl PasteRepository for InMemoryPasteRepository {
    async fn insert_paste(
        &self,
        id: &str,
        paste: &NewPaste,
    ) -> Result<Option<Paste>, ApplicationError> {
        let mut rows = self.rows()?;
        if rows.iter().any(|row| row.id == id) {
            return Ok(None);
        }

        let now = Utc::now();
        let created = Paste {
            id: id.to_string(),
            content: paste.content.clone(),
            language: paste.language.clone(),
            expires_at: paste.expires_in_ms.map(|ms| expiry_after(now, ms)),
            burn_after_read: paste.burn_after_read,
            is_private: paste.is_private,
            views: 0,
            created_at: now,
            deleted: false,
        };
        rows.push(created.clone());

        Ok(Some(created))
    }

    async fn read_paste(&self, id: &str, policy: BurnPolicy) -> Result<Paste, ApplicationError> {
        let now = Utc::now();
        let mut rows = self.rows()?;
        let row = rows
            .iter_mut()
            .find(|row| row.id == id && row.is_readable_at(now))
            .ok_or(ApplicationError::NotFound)?;

        let views_before = row.views;
        row.views += 1;
        if row.burn_after_read && policy.burns_at(views_before) {
            row.deleted = true;
        }

        Ok(row.clone())
    }

    async fn list_pastes(&self, limit: i64) -> Result<Vec<PasteSummary>, ApplicationError> {
        let now = Utc::now();
        let rows = self.rows()?;
        let limit = usize::try_from(limit).unwrap_or(0);

        let mut live: Vec<&Paste> = rows.iter().filter(|row| row.is_readable_at(now)).collect();
        // created_at DESC, id ASC: the same order the SQL listing uses
        live.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(live
            .into_iter()
            .take(limit)
            .map(|row| {
                let (content, truncated) = preview_content(&row.content);
                PasteSummary {
                    id: row.id.clone(),
                    content,
                    language: row.language.clone(),
                    created_at: row.created_at,
                    views: row.views,
                    is_private: row.is_private,
                    burn_after_read: row.burn_after_read,
                    expires_at: row.expires_at,
                    truncated,
                }
            })
            .collect())
    }

    async fn delete_paste(&self, id: &str) -> Result<(), ApplicationError> {
        let mut rows = self.rows()?;
        let row = rows
            .iter_mut()
            .find(|row| row.id == id && !row.deleted)
            .ok_or(ApplicationError::NotFound)?;
        row.deleted = true;
        Ok(())
    }

    async fn ping(&self) -> Result<(), ApplicationError> {
        self.rows().map(|_| ())
    }
}

fn expiry_after(now: DateTime<Utc>, ms: i64) -> DateTime<Utc> {
    Duration::try_milliseconds(ms)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(if ms < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}
