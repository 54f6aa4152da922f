//! Roadmap generation: model-written plan first, deterministic planner as fallback.

use serde::Deserialize;
use tracing::info;

use crate::assistant::ExternalModel;
use crate::roadmap::planner::{plan_roadmap, Roadmap};

/// Request body for roadmap generation.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapRequest {
    pub target_role: String,
    pub missing_skills: Vec<String>,
    #[serde(default = "default_availability_hours")]
    pub availability_hours: u32,
    #[serde(default = "default_language")]
    pub preferred_language: String,
}

fn default_availability_hours() -> u32 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

/// Produces a roadmap for an already validated request.
///
/// A model roadmap is only accepted with a non-empty weekly plan. Its role is
/// forced to the requested one and a missing week count is recomputed.
pub async fn generate_roadmap(model: &dyn ExternalModel, request: &RoadmapRequest) -> Roadmap {
    if let Some(mut roadmap) = model
        .generate_roadmap(request)
        .await
        .filter(|r| !r.weekly_plan.is_empty())
    {
        roadmap.target_role = request.target_role.clone();
        if roadmap.total_weeks == 0 {
            roadmap.total_weeks = roadmap.last_week();
        }
        info!(
            "Roadmap for '{}' written by model: {} weeks",
            request.target_role, roadmap.total_weeks
        );
        return roadmap;
    }

    let roadmap = plan_roadmap(
        &request.target_role,
        &request.missing_skills,
        request.availability_hours,
    );
    info!(
        "Roadmap for '{}' planned locally: {} skills over {} weeks",
        request.target_role,
        request.missing_skills.len(),
        roadmap.total_weeks
    );
    roadmap
}
