// Learning roadmaps: resource catalog, deterministic planner, and the
// model-first generation pipeline behind /roadmap/generate.

pub mod generator;
pub mod handlers;
pub mod planner;
pub mod prompts;
pub mod resources;
