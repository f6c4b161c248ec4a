//! Typed HTTP client for the `/api` surface.

mod error;

pub use error::ClientError;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    adapters::dto::paste_dto::{
        CreatePasteRequest, CreatePasteResponse, MessageResponse, PasteResponse,
        PasteSummaryResponse,
    },
    domain::models::paste::{Paste, PasteSummary},
};

#[derive(Debug, Clone)]
pub struct PasteClient {
    client: Client,
    api_url: String,
}

impl PasteClient {
    /// `api_url` is the API root, e.g. `http://localhost:3001/api`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_url)
    }

    pub fn with_client(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn create_paste(&self, request: &CreatePasteRequest) -> Result<String, ClientError> {
        let url = format!("{}/pastes", self.api_url);
        let response = self.client.post(&url).json(request).send().await?;
        let created: CreatePasteResponse = Self::decode(response).await?;
        debug!("Created paste {}", created.id);
        Ok(created.id)
    }

    pub async fn get_paste(&self, id: &str) -> Result<Paste, ClientError> {
        let url = format!("{}/pastes/{}", self.api_url, id);
        let response = self.client.get(&url).send().await?;
        let paste: PasteResponse = Self::decode(response).await?;
        Ok(paste.into())
    }

    pub async fn list_pastes(&self) -> Result<Vec<PasteSummary>, ClientError> {
        let url = format!("{}/pastes", self.api_url);
        let response = self.client.get(&url).send().await?;
        let pastes: Vec<PasteSummaryResponse> = Self::decode(response).await?;
        Ok(pastes.into_iter().map(Into::into).collect())
    }

    pub async fn delete_paste(&self, id: &str) -> Result<String, ClientError> {
        let url = format!("{}/pastes/{}", self.api_url, id);
        let response = self.client.delete(&url).send().await?;
        let deleted: MessageResponse = Self::decode(response).await?;
        Ok(deleted.message)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited),
            status => Err(ClientError::Status(status.as_u16())),
        }
    }
}
