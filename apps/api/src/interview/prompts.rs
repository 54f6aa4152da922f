// All LLM prompt constants for the interview coach.

/// System prompt for answer evaluation. Enforces JSON-only output.
pub const EVALUATION_SYSTEM: &str = "You are an expert interview coach. \
    You grade candidate answers honestly and explain how to improve them. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Evaluation prompt. Replace `{role}`, `{question}`, `{answer}` and `{language}` before sending.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate this interview answer for a {role} position.

Question: {question}
Answer: {answer}

Respond in {language}. Return a JSON object:
{
  "score": 7,
  "clarity": 7,
  "structure": 6,
  "technical_depth": 8,
  "feedback": "<detailed feedback in {language}>",
  "improved_answer": "<a better version of the answer>",
  "tips": ["tip1", "tip2", "tip3"]
}

All scores are whole numbers from 0 to 10.

Only return JSON."#;
