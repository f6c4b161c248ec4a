use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("paste not found or has been burned")]
    NotFound,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Repository(ApplicationError),
}

impl From<ApplicationError> for ClientError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::NotFound => ClientError::NotFound,
            ApplicationError::TooManyRequests => ClientError::RateLimited,
            other => ClientError::Repository(other),
        }
    }
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound)
    }
}
