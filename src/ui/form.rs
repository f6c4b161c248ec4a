use std::str::FromStr;

use crate::adapters::dto::paste_dto::CreatePasteRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Plain,
    Javascript,
    Python,
    Html,
    Css,
    Json,
    Xml,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Plain,
        Language::Javascript,
        Language::Python,
        Language::Html,
        Language::Css,
        Language::Json,
        Language::Xml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Plain => "plain",
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Xml => "xml",
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // older clients send `text` for plain text
            "plain" | "text" => Ok(Language::Plain),
            other => Language::ALL
                .into_iter()
                .find(|language| language.as_str() == other)
                .ok_or(()),
        }
    }
}

/// Expiration presets offered by the create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    FiveMinutes,
    TenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    Never,
}

impl Expiration {
    pub const ALL: [Expiration; 6] = [
        Expiration::FiveMinutes,
        Expiration::TenMinutes,
        Expiration::OneHour,
        Expiration::OneDay,
        Expiration::OneWeek,
        Expiration::Never,
    ];

    /// Lifetime in milliseconds, `None` for pastes that never expire.
    pub fn as_millis(self) -> Option<i64> {
        const MINUTE: i64 = 60 * 1000;
        match self {
            Expiration::FiveMinutes => Some(5 * MINUTE),
            Expiration::TenMinutes => Some(10 * MINUTE),
            Expiration::OneHour => Some(60 * MINUTE),
            Expiration::OneDay => Some(24 * 60 * MINUTE),
            Expiration::OneWeek => Some(7 * 24 * 60 * MINUTE),
            Expiration::Never => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Expiration::FiveMinutes => "5min",
            Expiration::TenMinutes => "10min",
            Expiration::OneHour => "1hour",
            Expiration::OneDay => "1day",
            Expiration::OneWeek => "1week",
            Expiration::Never => "never",
        }
    }
}

impl FromStr for Expiration {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expiration::ALL
            .into_iter()
            .find(|expiration| expiration.key() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteForm {
    /// Shown locally only; the API has no title field.
    pub title: String,
    pub content: String,
    pub language: Language,
    pub expiration: Expiration,
    pub is_private: bool,
    pub burn_after_read: bool,
}

impl Default for PasteForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            language: Language::Plain,
            expiration: Expiration::FiveMinutes,
            is_private: false,
            burn_after_read: false,
        }
    }
}

impl PasteForm {
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Clears the form after a successful create. The expiration goes back to `never`.
    pub fn reset(&mut self) {
        *self = Self {
            expiration: Expiration::Never,
            ..Self::default()
        };
    }

    pub fn to_request(&self) -> CreatePasteRequest {
        CreatePasteRequest {
            content: self.content.clone(),
            language: Some(self.language.as_str().to_string()),
            expires_in: self.expiration.as_millis(),
            burn_after_read: Some(self.burn_after_read),
            is_private: Some(self.is_private),
        }
    }
}
