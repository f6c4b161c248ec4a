use chrono::{DateTime, Utc};

/// Formats a timestamp the way the history list shows it, e.g. `Mar 7, 2024, 09:05 PM`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}

pub fn share_url(origin: &str, paste_id: &str) -> String {
    format!("{}/paste/{}", origin.trim_end_matches('/'), paste_id)
}
