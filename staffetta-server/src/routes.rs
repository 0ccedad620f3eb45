use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers;
use crate::{health, AppState};

pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health))
        .route("/register", post(controllers::register))
        .route("/clients", get(controllers::list_clients))
        .route("/group/create", post(controllers::create_group))
        .route("/send", post(controllers::send))
        .route("/send_video", post(controllers::send_video))
        .route("/video/:filename", get(controllers::get_video))
        .route("/messages/:client_id", get(controllers::list_messages))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// Qualsiasi origine con credenziali: l'origine viene rispecchiata perché "*"
/// non è ammesso insieme ad allow-credentials.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
