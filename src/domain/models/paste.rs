use chrono::{DateTime, Utc};
use rand::Rng;

pub const DEFAULT_LANGUAGE: &str = "plain";

/// Maximum number of summaries returned by a listing.
pub const LIST_LIMIT: i64 = 100;

/// Number of characters of content kept in a listing summary.
pub const PREVIEW_CHARS: usize = 100;

pub const TRUNCATION_MARKER: &str = "...";

#[derive(Debug, Clone, PartialEq)]
pub struct Paste {
    pub id: String,
    pub content: String,
    pub language: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub burn_after_read: bool,
    pub is_private: bool,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

impl Paste {
    /// A paste is readable while it is not deleted and `now` has not passed its expiry.
    pub fn is_readable_at(&self, now: DateTime<Utc>) -> bool {
        !self.deleted && self.expires_at.map_or(true, |expires_at| expires_at > now)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PasteSummary {
    pub id: String,
    pub content: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub views: u64,
    pub is_private: bool,
    pub burn_after_read: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub truncated: bool,
}

/// Input for creating a paste. `expires_in_ms` is relative to the storage clock.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaste {
    pub content: String,
    pub language: String,
    pub expires_in_ms: Option<i64>,
    pub burn_after_read: bool,
    pub is_private: bool,
}

impl NewPaste {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            expires_in_ms: None,
            burn_after_read: false,
            is_private: false,
        }
    }
}

/// Draws a fresh identifier: 4 random bytes, hex encoded.
pub fn generate_paste_id() -> String {
    let bytes: [u8; 4] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Normalizes a client supplied language tag, falling back to `plain`.
pub fn normalize_language(language: Option<&str>) -> String {
    match language.map(str::trim) {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

/// Cuts `content` down to the listing preview.
///
/// Returns the preview (with [`TRUNCATION_MARKER`] appended when something was cut)
/// and whether `content` was longer than [`PREVIEW_CHARS`].
pub fn preview_content(content: &str) -> (String, bool) {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => (format!("{}{}", &content[..cut], TRUNCATION_MARKER), true),
        None => (content.to_string(), false),
    }
}
