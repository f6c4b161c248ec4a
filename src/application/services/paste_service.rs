use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    application::{error::ApplicationError, repositories::paste_repository::PasteRepository},
    domain::{
        config::server::BurnPolicy,
        models::paste::{generate_paste_id, NewPaste, Paste, PasteSummary, LIST_LIMIT},
    },
};

/// How many fresh identifiers are tried before giving up on a create.
pub const MAX_ID_ATTEMPTS: usize = 8;

#[derive(Clone)]
pub struct PasteService {
    repository: Arc<dyn PasteRepository>,
    burn_policy: BurnPolicy,
    id_generator: fn() -> String,
}

impl PasteService {
    pub fn new(repository: Arc<dyn PasteRepository>, burn_policy: BurnPolicy) -> Self {
        Self {
            repository,
            burn_policy,
            id_generator: generate_paste_id,
        }
    }

    pub fn with_id_generator(mut self, id_generator: fn() -> String) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn burn_policy(&self) -> BurnPolicy {
        self.burn_policy
    }

    pub async fn create_paste(&self, paste: NewPaste) -> Result<Paste, ApplicationError> {
        if paste.content.trim().is_empty() {
            return Err(ApplicationError::BadRequest(
                "content must not be empty".to_string(),
            ));
        }

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = (self.id_generator)();
            if let Some(created) = self.repository.insert_paste(&id, &paste).await? {
                info!(
                    "Paste created: id={}, language={}, size={}, burn_after_read={}, expires_at={:?}",
                    created.id,
                    created.language,
                    created.content.len(),
                    created.burn_after_read,
                    created.expires_at
                );
                return Ok(created);
            }
            warn!("Paste id collision on '{}' (attempt {})", id, attempt);
        }

        Err(ApplicationError::InternalError(format!(
            "no free paste id after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }

    pub async fn read_paste(&self, id: &str) -> Result<Paste, ApplicationError> {
        let paste = self.repository.read_paste(id, self.burn_policy).await?;
        if paste.deleted {
            info!("Paste {} burned after {} views", paste.id, paste.views);
        }
        Ok(paste)
    }

    pub async fn list_pastes(&self) -> Result<Vec<PasteSummary>, ApplicationError> {
        self.repository.list_pastes(LIST_LIMIT).await
    }

    pub async fn delete_paste(&self, id: &str) -> Result<(), ApplicationError> {
        self.repository.delete_paste(id).await?;
        info!("Paste {} deleted", id);
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), ApplicationError> {
        self.repository.ping().await
    }
}
