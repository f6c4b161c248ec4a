use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("paste not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("too many requests")]
    TooManyRequests,
    #[error("internal error: {0}")]
    InternalError(String),
    #[error("database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for ApplicationError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => ApplicationError::NotFound,
            other => ApplicationError::DatabaseError(other.to_string()),
        }
    }
}
