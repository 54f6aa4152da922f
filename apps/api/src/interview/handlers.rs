//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::evaluator::{evaluate_answer, EvaluateAnswerRequest};
use crate::interview::question_bank::{pick_questions, InterviewQuestion};
use crate::interview::scorer::AnswerEvaluation;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub role: String,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    5
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub role: String,
    pub questions: Vec<InterviewQuestion>,
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /interview/questions
///
/// Returns a shuffled selection of canned questions for the role.
pub async fn handle_get_questions(
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let questions = pick_questions(&request.role, request.count, &mut rand::thread_rng());

    Ok(Json(QuestionsResponse {
        role: request.role,
        total: questions.len(),
        questions,
    }))
}

/// POST /interview/evaluate
///
/// Scores an answer to an interview question. Blank answers are rejected.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<EvaluateAnswerRequest>,
) -> Result<Json<AnswerEvaluation>, AppError> {
    if request.answer.trim().is_empty() {
        return Err(AppError::validation("Answer cannot be empty"));
    }

    let evaluation = evaluate_answer(state.model.as_ref(), &request).await;
    Ok(Json(evaluation))
}
