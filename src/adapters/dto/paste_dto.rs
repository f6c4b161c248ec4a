use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::paste::{normalize_language, NewPaste, Paste, PasteSummary};

/// Upper bound on `expiresIn` in either direction (about 100 years).
pub const MAX_EXPIRES_IN_MS: i64 = 100 * 365 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePasteRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "expiresIn", default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(rename = "burnAfterRead", default, skip_serializing_if = "Option::is_none")]
    pub burn_after_read: Option<bool>,
    #[serde(rename = "isPrivate", default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

impl From<CreatePasteRequest> for NewPaste {
    fn from(request: CreatePasteRequest) -> Self {
        NewPaste {
            language: normalize_language(request.language.as_deref()),
            content: request.content,
            expires_in_ms: request
                .expires_in
                .map(|ms| ms.clamp(-MAX_EXPIRES_IN_MS, MAX_EXPIRES_IN_MS)),
            burn_after_read: request.burn_after_read.unwrap_or(false),
            is_private: request.is_private.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePasteResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasteResponse {
    pub id: String,
    pub content: String,
    pub language: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(rename = "burnAfterRead")]
    pub burn_after_read: bool,
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
    pub views: u64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

impl From<Paste> for PasteResponse {
    fn from(paste: Paste) -> Self {
        Self {
            id: paste.id,
            content: paste.content,
            language: paste.language,
            expires_at: paste.expires_at,
            burn_after_read: paste.burn_after_read,
            is_private: paste.is_private,
            views: paste.views,
            created_at: paste.created_at,
            deleted: paste.deleted,
        }
    }
}

impl From<PasteResponse> for Paste {
    fn from(response: PasteResponse) -> Self {
        Self {
            id: response.id,
            content: response.content,
            language: response.language,
            expires_at: response.expires_at,
            burn_after_read: response.burn_after_read,
            is_private: response.is_private,
            views: response.views,
            created_at: response.created_at,
            deleted: response.deleted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasteSummaryResponse {
    pub id: String,
    pub content: String,
    pub language: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub views: u64,
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
    #[serde(rename = "burnAfterRead")]
    pub burn_after_read: bool,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub truncated: bool,
}

impl From<PasteSummary> for PasteSummaryResponse {
    fn from(summary: PasteSummary) -> Self {
        Self {
            id: summary.id,
            content: summary.content,
            language: summary.language,
            created_at: summary.created_at,
            views: summary.views,
            is_private: summary.is_private,
            burn_after_read: summary.burn_after_read,
            expires_at: summary.expires_at,
            truncated: summary.truncated,
        }
    }
}

impl From<PasteSummaryResponse> for PasteSummary {
    fn from(response: PasteSummaryResponse) -> Self {
        Self {
            id: response.id,
            content: response.content,
            language: response.language,
            created_at: response.created_at,
            views: response.views,
            is_private: response.is_private,
            burn_after_read: response.burn_after_read,
            expires_at: response.expires_at,
            truncated: response.truncated,
        }
    }
}
