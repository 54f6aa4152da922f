// Skill extraction: taxonomy tables, keyword matcher, PDF intake, and the
// model-first extraction pipeline behind the /skills routes.

pub mod extraction;
pub mod handlers;
pub mod matcher;
pub mod pdf;
pub mod prompts;
pub mod taxonomy;
