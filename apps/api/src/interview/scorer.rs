//! Interview Answer Heuristic Scorer — rule-based stand-in for the model evaluator.
//!
//! Pure function of (question, answer): same input, same evaluation.

use serde::{Deserialize, Serialize};

const EXAMPLE_MARKERS: &[&str] = &["example", "for instance", "such as", "like", "when i"];
const STRUCTURE_MARKERS: &[&str] = &["first", "second", "finally", "also", "however", "because"];

const MIN_CLARITY: u32 = 3;
const MAX_SCORE: u32 = 10;
const STRONG_AXIS: u32 = 7;
const WEAK_AXIS: u32 = 4;

const ANSWER_TIPS: &[&str] = &[
    "Use the STAR method: Situation, Task, Action, Result",
    "Keep answers between 1-3 minutes when spoken",
    "Always include a specific example from your experience",
    "End with what you learned or the outcome",
];

/// Evaluation of one interview answer. Every score is in 0–10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub score: u32,
    pub clarity: u32,
    pub structure: u32,
    pub technical_depth: u32,
    pub feedback: String,
    pub improved_answer: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl AnswerEvaluation {
    /// Pins every score into 0–10.
    pub fn clamped(mut self) -> Self {
        self.score = self.score.min(MAX_SCORE);
        self.clarity = self.clarity.min(MAX_SCORE);
        self.structure = self.structure.min(MAX_SCORE);
        self.technical_depth = self.technical_depth.min(MAX_SCORE);
        self
    }
}

/// Scores an answer on length, structuring words, and example markers.
///
/// The caller rejects blank answers before this runs.
pub fn score_answer(question: &str, answer: &str) -> AnswerEvaluation {
    let word_count = answer.split_whitespace().count();
    let answer_lower = answer.to_lowercase();
    let has_example = EXAMPLE_MARKERS.iter().any(|m| answer_lower.contains(m));
    let has_structure = STRUCTURE_MARKERS.iter().any(|m| answer_lower.contains(m));

    let clarity = ((word_count / 10) as u32).clamp(MIN_CLARITY, MAX_SCORE);
    let structure = if has_structure { STRONG_AXIS } else { WEAK_AXIS };
    let technical_depth = if has_example { STRONG_AXIS } else { WEAK_AXIS };
    let score = (clarity + structure + technical_depth) / 3;

    let example_note = if has_example {
        "Good use of examples!"
    } else {
        "Try to add specific examples."
    };
    let structure_note = if has_structure {
        "Good structure!"
    } else {
        "Try to organize your answer with clear points."
    };

    AnswerEvaluation {
        score,
        clarity,
        structure,
        technical_depth,
        feedback: format!("Your answer has {word_count} words. {example_note} {structure_note}"),
        improved_answer: format!(
            "A strong answer to '{question}' should include: a clear definition, a real-world example, and a conclusion."
        ),
        tips: ANSWER_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<&'static str> {
        std::iter::repeat("word").take(n).collect()
    }

    #[test]
    fn test_thirty_words_with_example_and_structure() {
        let mut tokens = words(25);
        tokens.extend(["for", "instance", "it", "failed", "because"]);
        let answer = tokens.join(" ");
        assert_eq!(answer.split_whitespace().count(), 30);

        let eval = score_answer("Why?", &answer);
        assert_eq!(eval.clarity, 3);
        assert_eq!(eval.structure, 7);
        assert_eq!(eval.technical_depth, 7);
        assert_eq!(eval.score, 5);
    }

    #[test]
    fn test_short_plain_answer_gets_floor_scores() {
        let eval = score_answer("What is a queue?", "A FIFO list.");
        assert_eq!(eval.clarity, 3);
        assert_eq!(eval.structure, 4);
        assert_eq!(eval.technical_depth, 4);
        assert_eq!(eval.score, 3);
        assert_eq!(
            eval.feedback,
            "Your answer has 3 words. Try to add specific examples. Try to organize your answer with clear points."
        );
    }

    #[test]
    fn test_clarity_caps_at_ten() {
        let answer = words(250).join(" ");
        let eval = score_answer("q", &answer);
        assert_eq!(eval.clarity, 10);
        assert_eq!(eval.score, 6); // (10 + 4 + 4) / 3
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let eval = score_answer("q", "FIRST I did this. Such As that.");
        assert_eq!(eval.structure, 7);
        assert_eq!(eval.technical_depth, 7);
        assert!(eval.feedback.contains("Good use of examples!"));
        assert!(eval.feedback.contains("Good structure!"));
    }

    #[test]
    fn test_improved_answer_quotes_question() {
        let eval = score_answer("What is a deadlock?", "Two threads wait forever.");
        assert_eq!(
            eval.improved_answer,
            "A strong answer to 'What is a deadlock?' should include: a clear definition, a real-world example, and a conclusion."
        );
    }

    #[test]
    fn test_tips_are_fixed() {
        let a = score_answer("q1", "short");
        let b = score_answer("q2", "a much longer answer, for example with details");
        assert_eq!(a.tips, b.tips);
        assert_eq!(a.tips.len(), 4);
        assert!(a.tips[0].contains("STAR"));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let answer = "First, I profiled the service. For instance, the cache missed.";
        assert_eq!(score_answer("q", answer), score_answer("q", answer));
    }

    #[test]
    fn test_clamped_pins_scores() {
        let eval = AnswerEvaluation {
            score: 42,
            clarity: 11,
            structure: 3,
            technical_depth: 99,
            feedback: String::new(),
            improved_answer: String::new(),
            tips: vec![],
        }
        .clamped();
        assert_eq!((eval.score, eval.clarity, eval.structure, eval.technical_depth), (10, 10, 3, 10));
    }
}
