pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::roadmap::handlers as roadmap;
use crate::skills::handlers as skills;
use crate::skills::pdf::MAX_RESUME_BYTES;
use crate::state::AppState;

/// Leaves room for multipart framing around a maximum-size resume, so the
/// size check in the handler produces the error message, not the extractor.
const BODY_LIMIT_BYTES: usize = MAX_RESUME_BYTES + 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skills
        .route("/skills/extract-resume", post(skills::handle_extract_resume))
        .route(
            "/skills/extract-skills-text",
            post(skills::handle_extract_text),
        )
        // Roadmap
        .route("/roadmap/generate", post(roadmap::handle_generate_roadmap))
        // Interview coach
        .route("/interview/questions", post(interview::handle_get_questions))
        .route(
            "/interview/evaluate",
            post(interview::handle_evaluate_answer),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
