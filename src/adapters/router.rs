use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::adapters::{
    controllers::{health_controller::HealthController, paste_controller::PasteController},
    middleware::rate_limit,
    state::AppState,
};

async fn index() -> &'static str {
    "pastebin-service: see /api/pastes"
}

/// Builds the full HTTP surface. The rate limit wraps every route.
pub fn create_router(app_state: AppState, cors: CorsLayer) -> Router {
    let api_routes = Router::new()
        .route(
            "/pastes",
            get(PasteController::list_pastes).post(PasteController::create_paste),
        )
        .route(
            "/pastes/{paste_id}",
            get(PasteController::get_paste).delete(PasteController::delete_paste),
        )
        .route("/health", get(HealthController::health_check));

    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            rate_limit,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
