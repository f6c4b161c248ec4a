use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{
    adapters::dto::paste_dto::{
        CreatePasteRequest, CreatePasteResponse, MessageResponse, PasteResponse,
        PasteSummaryResponse,
    },
    application::{error::ApplicationError, services::paste_service::PasteService},
};

pub struct PasteController;

impl PasteController {
    /// POST /api/pastes
    pub async fn create_paste(
        State(paste_service): State<PasteService>,
        Json(body): Json<CreatePasteRequest>,
    ) -> Result<Json<CreatePasteResponse>, ApplicationError> {
        let paste = paste_service.create_paste(body.into()).await?;
        Ok(Json(CreatePasteResponse { id: paste.id }))
    }

    /// GET /api/pastes/{paste_id}
    ///
    /// Every successful call counts as a view and may burn the paste.
    pub async fn get_paste(
        State(paste_service): State<PasteService>,
        Path(paste_id): Path<String>,
    ) -> Result<Json<PasteResponse>, ApplicationError> {
        let paste = paste_service.read_paste(&paste_id).await?;
        Ok(Json(PasteResponse::from(paste)))
    }

    /// GET /api/pastes
    pub async fn list_pastes(
        State(paste_service): State<PasteService>,
    ) -> Result<Json<Vec<PasteSummaryResponse>>, ApplicationError> {
        let pastes = paste_service.list_pastes().await?;
        info!("Listing {} pastes", pastes.len());
        Ok(Json(pastes.into_iter().map(Into::into).collect()))
    }

    /// DELETE /api/pastes/{paste_id}
    pub async fn delete_paste(
        State(paste_service): State<PasteService>,
        Path(paste_id): Path<String>,
    ) -> Result<Json<MessageResponse>, ApplicationError> {
        paste_service.delete_paste(&paste_id).await?;
        Ok(Json(MessageResponse {
            message: "Paste deleted successfully".to_string(),
        }))
    }
}
