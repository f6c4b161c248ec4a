use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::{
        config::server::BurnPolicy,
        models::paste::{NewPaste, Paste, PasteSummary},
    },
};

#[async_trait]
pub trait PasteRepository: Send + Sync {
    /// Inserts a paste under `id` with zero views. Returns `Ok(None)` when the
    /// identifier is already taken.
    async fn insert_paste(&self, id: &str, paste: &NewPaste)
        -> Result<Option<Paste>, ApplicationError>;

    /// Records one read of a live paste: bumps `views` and, for burn-after-read
    /// pastes whose previous view count reaches the policy threshold, marks it
    /// deleted. Both happen atomically. Returns the row as it is after the read.
    async fn read_paste(&self, id: &str, policy: BurnPolicy) -> Result<Paste, ApplicationError>;

    /// Live pastes, newest first, with content cut down to the preview.
    /// Pastes created at the same instant are ordered by id, ascending.
    async fn list_pastes(&self, limit: i64) -> Result<Vec<PasteSummary>, ApplicationError>;

    /// Soft-deletes a paste that is not already deleted.
    async fn delete_paste(&self, id: &str) -> Result<(), ApplicationError>;

    async fn ping(&self) -> Result<(), ApplicationError>;
}
