//! Skill extraction pipeline: model first, keyword matcher as fallback.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::ExternalModel;
use crate::skills::matcher::{match_skills, ExtractedSkill, Proficiency};
use crate::skills::taxonomy::categorize_skill;

/// Confidence assumed when the model does not report one.
const DEFAULT_MODEL_CONFIDENCE: f32 = 1.0;

/// A skill as returned by the model. Everything except the name is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub proficiency: Option<String>,
    #[serde(default)]
    pub confidence: Option<f32>,
}

/// Which stage produced the skill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    Llm,
    KeywordMatching,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillExtraction {
    pub skills: Vec<ExtractedSkill>,
    pub raw_text_length: usize,
    pub method: ExtractionMethod,
}

/// Extracts skills from `text`, asking the model first.
///
/// An empty or failed model result falls through to the keyword matcher.
pub async fn extract_skills(model: &dyn ExternalModel, text: &str, language: &str) -> SkillExtraction {
    let raw_text_length = text.chars().count();

    let from_model = model
        .extract_skills(text, language)
        .await
        .map(normalize_records)
        .unwrap_or_default();

    let (skills, method) = if from_model.is_empty() {
        (match_skills(text), ExtractionMethod::KeywordMatching)
    } else {
        (from_model, ExtractionMethod::Llm)
    };

    info!(
        "Extracted {} skills from {} chars via {:?}",
        skills.len(),
        raw_text_length,
        method
    );

    SkillExtraction {
        skills,
        raw_text_length,
        method,
    }
}

/// Fills the gaps in model records. Records without a usable name are dropped.
fn normalize_records(records: Vec<SkillRecord>) -> Vec<ExtractedSkill> {
    records
        .into_iter()
        .filter_map(|record| {
            let name = record.name.trim().to_string();
            if name.is_empty() {
                return None;
            }

            let category = record
                .category
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| categorize_skill(&name).to_string());
            let proficiency = record
                .proficiency
                .as_deref()
                .and_then(Proficiency::from_label)
                .unwrap_or_default();
            let confidence = record
                .confidence
                .filter(|c| c.is_finite())
                .unwrap_or(DEFAULT_MODEL_CONFIDENCE)
                .clamp(0.0, 1.0);

            Some(ExtractedSkill {
                name,
                category,
                proficiency,
                confidence,
            })
        })
        .collect()
}
