pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::extract::handlers as extract_handlers;
use crate::state::AppState;
use crate::tailor::handlers as tailor_handlers;

// Multipart body ceiling: several 4MB files plus form overhead. Per-file
// limits are enforced by validation; this only bounds the raw request.
const EXTRACT_BODY_LIMIT: usize = 32 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/sample-resume",
            get(tailor_handlers::handle_sample_resume),
        )
        .route("/api/v1/tailor", post(tailor_handlers::handle_tailor))
        .route(
            "/api/v1/extract",
            post(extract_handlers::handle_extract)
                .route_layer(DefaultBodyLimit::max(EXTRACT_BODY_LIMIT)),
        )
        .route(
            "/api/v1/render/:panel",
            post(export_handlers::handle_render),
        )
        .route(
            "/api/v1/export/docx",
            post(export_handlers::handle_export_docx),
        )
        .with_state(state)
}
