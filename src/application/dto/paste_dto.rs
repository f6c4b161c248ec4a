use chrono::{DateTime, Utc};

use crate::domain::models::paste::{normalize_language, Paste, PasteSummary, TRUNCATION_MARKER};

/// A full `pastes` row as read back from storage.
#[derive(Debug, Clone)]
pub struct PasteDTO {
    pub id: String,
    pub content: String,
    pub language: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub burn_after_read: bool,
    pub is_private: bool,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

impl From<PasteDTO> for Paste {
    fn from(value: PasteDTO) -> Self {
        Paste {
            id: value.id,
            content: value.content,
            language: normalize_language(value.language.as_deref()),
            expires_at: value.expires_at,
            burn_after_read: value.burn_after_read,
            is_private: value.is_private,
            views: value.views,
            created_at: value.created_at,
            deleted: value.deleted,
        }
    }
}

/// A listing row: `content` holds the already cut prefix and `truncated`
/// tells whether anything was cut.
#[derive(Debug, Clone)]
pub struct PasteSummaryDTO {
    pub id: String,
    pub content: String,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub views: u64,
    pub is_private: bool,
    pub burn_after_read: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub truncated: bool,
}

impl From<PasteSummaryDTO> for PasteSummary {
    fn from(value: PasteSummaryDTO) -> Self {
        let content = if value.truncated {
            format!("{}{}", value.content, TRUNCATION_MARKER)
        } else {
            value.content
        };

        PasteSummary {
            id: value.id,
            content,
            language: normalize_language(value.language.as_deref()),
            created_at: value.created_at,
            views: value.views,
            is_private: value.is_private,
            burn_after_read: value.burn_after_read,
            expires_at: value.expires_at,
            truncated: value.truncated,
        }
    }
}
