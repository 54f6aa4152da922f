//! External model collaborator: the model-backed first stage of every pipeline.
//!
//! Every method returns `None` when the model is unavailable or its answer is
//! unusable. Callers then run their deterministic fallback; errors never
//! reach a handler.
//!
//! `AppState` holds an `Arc<dyn ExternalModel>`, so tests swap in a stub.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::interview::evaluator::EvaluateAnswerRequest;
use crate::interview::prompts::{EVALUATION_PROMPT_TEMPLATE, EVALUATION_SYSTEM};
use crate::interview::scorer::AnswerEvaluation;
use crate::llm_client::prompts::{language_name, render_prompt};
use crate::llm_client::{CallOptions, LlmClient};
use crate::roadmap::generator::RoadmapRequest;
use crate::roadmap::planner::Roadmap;
use crate::roadmap::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};
use crate::skills::extraction::SkillRecord;
use crate::skills::prompts::{
    MAX_PROMPT_TEXT_CHARS, SKILL_EXTRACTION_PROMPT_TEMPLATE, SKILL_EXTRACTION_SYSTEM,
};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ExternalModel: Send + Sync {
    /// Whether calls can reach a model at all. Reported by the health check.
    fn is_configured(&self) -> bool;

    async fn extract_skills(&self, text: &str, language: &str) -> Option<Vec<SkillRecord>>;

    async fn generate_roadmap(&self, request: &RoadmapRequest) -> Option<Roadmap>;

    async fn evaluate_answer(&self, request: &EvaluateAnswerRequest) -> Option<AnswerEvaluation>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAssistant: model-backed implementation
// ────────────────────────────────────────────────────────────────────────────

const EXTRACTION_OPTIONS: CallOptions = CallOptions {
    max_tokens: 1000,
    temperature: 0.1,
};
const ROADMAP_OPTIONS: CallOptions = CallOptions {
    max_tokens: 2500,
    temperature: 0.3,
};
const EVALUATION_OPTIONS: CallOptions = CallOptions {
    max_tokens: 800,
    temperature: 0.3,
};

fn evaluation_prompt(request: &EvaluateAnswerRequest) -> String {
    render_prompt(
        EVALUATION_PROMPT_TEMPLATE,
        &[
            ("role", request.role.as_str()),
            ("question", request.question.as_str()),
            ("answer", request.answer.as_str()),
            ("language", language_name(&request.preferred_language)),
        ],
    )
}

/// Talks to the model through [`LlmClient`]. Without a client every call is `None`.
pub struct LlmAssistant {
    client: Option<LlmClient>,
}

impl LlmAssistant {
    pub fn new(client: Option<LlmClient>) -> Self {
        Self { client }
    }

    /// Single structured call; any failure is logged and swallowed.
    async fn ask<T: DeserializeOwned>(
        &self,
        task: &str,
        prompt: &str,
        system: &str,
        options: CallOptions,
    ) -> Option<T> {
        let client = self.client.as_ref()?;
        match client.call_json::<T>(prompt, system, options).await {
            Ok(value) => {
                debug!("Model {task} succeeded");
                Some(value)
            }
            Err(e) => {
                warn!("Model {task} failed, using fallback: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl ExternalModel for LlmAssistant {
    fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    async fn extract_skills(&self, text: &str, language: &str) -> Option<Vec<SkillRecord>> {
        let head: String = text.chars().take(MAX_PROMPT_TEXT_CHARS).collect();
        let prompt = render_prompt(
            SKILL_EXTRACTION_PROMPT_TEMPLATE,
            &[("language", language_name(language)), ("text", head.as_str())],
        );
        self.ask("skill extraction", &prompt, SKILL_EXTRACTION_SYSTEM, EXTRACTION_OPTIONS)
            .await
    }

    async fn generate_roadmap(&self, request: &RoadmapRequest) -> Option<Roadmap> {
        let skills = request.missing_skills.join(", ");
        let hours = request.availability_hours.to_string();
        let prompt = render_prompt(
            ROADMAP_PROMPT_TEMPLATE,
            &[
                ("target_role", request.target_role.as_str()),
                ("skills", skills.as_str()),
                ("hours", hours.as_str()),
                ("language", language_name(&request.preferred_language)),
            ],
        );
        self.ask("roadmap generation", &prompt, ROADMAP_SYSTEM, ROADMAP_OPTIONS)
            .await
    }

    async fn evaluate_answer(&self, request: &EvaluateAnswerRequest) -> Option<AnswerEvaluation> {
        let prompt = evaluation_prompt(request);
        self.ask("answer evaluation", &prompt, EVALUATION_SYSTEM, EVALUATION_OPTIONS)
            .await
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Returns canned results; the default stub behaves like an unconfigured model.
    #[derive(Default, Clone)]
    pub struct StubModel {
        pub skills: Option<Vec<SkillRecord>>,
        pub roadmap: Option<Roadmap>,
        pub evaluation: Option<AnswerEvaluation>,
    }

    #[async_trait]
    impl ExternalModel for StubModel {
        fn is_configured(&self) -> bool {
            self.skills.is_some() || self.roadmap.is_some() || self.evaluation.is_some()
        }

        async fn extract_skills(&self, _text: &str, _language: &str) -> Option<Vec<SkillRecord>> {
            self.skills.clone()
        }

        async fn generate_roadmap(&self, _request: &RoadmapRequest) -> Option<Roadmap> {
            self.roadmap.clone()
        }

        async fn evaluate_answer(&self, _request: &EvaluateAnswerRequest) -> Option<AnswerEvaluation> {
            self.evaluation.clone()
        }
    }
}
