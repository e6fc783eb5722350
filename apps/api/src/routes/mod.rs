pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Document upload (the web client posts to the trailing-slash form)
        .route("/upload-pdf", post(handlers::handle_upload_pdf))
        .route("/upload-pdf/", post(handlers::handle_upload_pdf))
        // Crossword API
        .route("/api/v1/crosswords", post(handlers::handle_generate))
        .route("/api/v1/crosswords/check", post(handlers::handle_check))
        .layer(body_limit)
        .with_state(state)
}
