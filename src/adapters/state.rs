use axum::extract::FromRef;

use crate::{adapters::rate_limiter::RateLimiter, application::services::paste_service::PasteService};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub paste_service: PasteService,
    pub rate_limiter: RateLimiter,
}
