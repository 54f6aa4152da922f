// All LLM prompt constants for skill extraction.

/// Only the head of a resume is sent to the model.
pub const MAX_PROMPT_TEXT_CHARS: usize = 3000;

/// System prompt for skill extraction. Enforces JSON-only output.
pub const SKILL_EXTRACTION_SYSTEM: &str = "You are an expert technical recruiter. \
    You read resumes and list the skills they demonstrate. \
    You MUST respond with a valid JSON array only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Skill extraction prompt. Replace `{language}` and `{text}` before sending.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract all technical and soft skills from the following resume/text.
The text may be written in {language}; always report skill names in English.

Return a JSON array of objects with this EXACT schema:
[
  {"name": "Python", "category": "programming", "proficiency": "intermediate"}
]

CATEGORY OPTIONS: programming, framework, database, cloud_devops, tool, concept, soft_skill
PROFICIENCY OPTIONS: beginner, intermediate, advanced

Only return the JSON array, nothing else.

Text:
{text}"#;
