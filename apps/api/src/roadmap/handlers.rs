//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::roadmap::generator::{generate_roadmap, RoadmapRequest};
use crate::roadmap::planner::Roadmap;
use crate::state::AppState;

/// POST /roadmap/generate
///
/// Builds a week-by-week learning plan for the missing skills.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<Roadmap>, AppError> {
    if request.missing_skills.is_empty() {
        return Err(AppError::validation("No missing skills provided"));
    }

    let roadmap = generate_roadmap(state.model.as_ref(), &request).await;
    Ok(Json(roadmap))
}
