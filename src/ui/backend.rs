use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    adapters::{dto::paste_dto::CreatePasteRequest, repositories::InMemoryPasteRepository},
    application::services::paste_service::PasteService,
    client::{ClientError, PasteClient},
    domain::{
        config::server::BurnPolicy,
        models::paste::{Paste, PasteSummary},
    },
};

/// Where the UI persists pastes.
#[async_trait]
pub trait PasteBackend: Send + Sync {
    async fn create_paste(&self, request: &CreatePasteRequest) -> Result<String, ClientError>;
    async fn get_paste(&self, id: &str) -> Result<Paste, ClientError>;
    async fn list_pastes(&self) -> Result<Vec<PasteSummary>, ClientError>;
    async fn delete_paste(&self, id: &str) -> Result<(), ClientError>;
}

#[async_trait]
impl PasteBackend for PasteClient {
    async fn create_paste(&self, request: &CreatePasteRequest) -> Result<String, ClientError> {
        PasteClient::create_paste(self, request).await
    }

    async fn get_paste(&self, id: &str) -> Result<Paste, ClientError> {
        PasteClient::get_paste(self, id).await
    }

    async fn list_pastes(&self) -> Result<Vec<PasteSummary>, ClientError> {
        PasteClient::list_pastes(self).await
    }

    async fn delete_paste(&self, id: &str) -> Result<(), ClientError> {
        PasteClient::delete_paste(self, id).await.map(|_| ())
    }
}

/// Backend-less variant: pastes live in this process only.
#[derive(Clone)]
pub struct LocalBackend {
    service: PasteService,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self::with_policy(BurnPolicy::default())
    }

    pub fn with_policy(burn_policy: BurnPolicy) -> Self {
        Self {
            service: PasteService::new(Arc::new(InMemoryPasteRepository::new()), burn_policy),
        }
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteBackend for LocalBackend {
    async fn create_paste(&self, request: &CreatePasteRequest) -> Result<String, ClientError> {
        let paste = self.service.create_paste(request.clone().into()).await?;
        Ok(paste.id)
    }

    async fn get_paste(&self, id: &str) -> Result<Paste, ClientError> {
        Ok(self.service.read_paste(id).await?)
    }

    async fn list_pastes(&self) -> Result<Vec<PasteSummary>, ClientError> {
        Ok(self.service.list_pastes().await?)
    }

    async fn delete_paste(&self, id: &str) -> Result<(), ClientError> {
        Ok(self.service.delete_paste(id).await?)
    }
}
