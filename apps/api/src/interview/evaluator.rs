//! Answer evaluation: model coach first, heuristic scorer as fallback.

use serde::Deserialize;
use tracing::info;

use crate::assistant::ExternalModel;
use crate::interview::scorer::{score_answer, AnswerEvaluation};

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateAnswerRequest {
    pub question: String,
    pub answer: String,
    pub role: String,
    #[serde(default = "default_language")]
    pub preferred_language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Evaluates a non-blank answer. Model scores are clamped into 0–10.
pub async fn evaluate_answer(model: &dyn ExternalModel, request: &EvaluateAnswerRequest) -> AnswerEvaluation {
    if let Some(evaluation) = model.evaluate_answer(request).await {
        info!("Answer for '{}' evaluated by model", request.role);
        return evaluation.clamped();
    }

    info!("Answer for '{}' scored heuristically", request.role);
    score_answer(&request.question, &request.answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::testing::StubModel;

    fn request(answer: &str) -> EvaluateAnswerRequest {
        EvaluateAnswerRequest {
            question: "Tell me about yourself.".to_string(),
            answer: answer.to_string(),
            role: "Software Engineer".to_string(),
            preferred_language: "en".to_string(),
        }
    }

    #[tokio::test]
    async fn test_falls_back_to_heuristic() {
        let model = StubModel::default();
        let eval = evaluate_answer(&model, &request("I build backend services.")).await;
        assert_eq!(eval, score_answer("Tell me about yourself.", "I build backend services."));
    }

    #[tokio::test]
    async fn test_model_evaluation_is_clamped() {
        let model = StubModel {
            evaluation: Some(AnswerEvaluation {
                score: 12,
                clarity: 9,
                structure: 8,
                technical_depth: 15,
                feedback: "Solid.".to_string(),
                improved_answer: "Same, with numbers.".to_string(),
                tips: vec!["Quantify impact".to_string()],
            }),
            ..StubModel::default()
        };
        let eval = evaluate_answer(&model, &request("anything")).await;
        assert_eq!(eval.score, 10);
        assert_eq!(eval.technical_depth, 10);
        assert_eq!(eval.feedback, "Solid.");
    }

    #[test]
    fn test_request_language_default() {
        let req: EvaluateAnswerRequest = serde_json::from_str(
            r#"{"question": "q", "answer": "a", "role": "Web Developer"}"#,
        )
        .unwrap();
        assert_eq!(req.preferred_language, "en");
    }
}
