// Interview coach: question bank, heuristic answer scorer, and the
// model-first evaluation pipeline behind the /interview routes.

pub mod evaluator;
pub mod handlers;
pub mod prompts;
pub mod question_bank;
pub mod scorer;
