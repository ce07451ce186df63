pub mod health;
pub mod parse;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Slack on top of the per-file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/parse-resume", post(parse::parse_resume_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
