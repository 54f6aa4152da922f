// All LLM prompt constants for roadmap generation.

/// System prompt for roadmap generation. Enforces JSON-only output.
pub const ROADMAP_SYSTEM: &str = "You are an experienced career mentor who designs \
    realistic self-study plans. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Roadmap prompt. Replace `{target_role}`, `{skills}`, `{hours}` and `{language}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a detailed week-by-week learning roadmap for someone who wants to become a {target_role}.
They need to learn: {skills}
They can study {hours} hours per week.
Respond in {language}.

Return a JSON object with this EXACT structure:
{
  "total_weeks": 4,
  "weekly_plan": [
    {
      "week": 1,
      "focus_skill": "<skill name>",
      "topics": ["topic1", "topic2", "topic3"],
      "resources": [
        {"title": "<resource name>", "url": "<url>", "type": "course"}
      ],
      "milestone": "<what to achieve by end of week>",
      "estimated_hours": 10
    }
  ],
  "summary": "<overall roadmap summary>",
  "tips": ["tip1", "tip2", "tip3"]
}

Rules:
- "week" starts at 1 and never decreases.
- "estimated_hours" is a whole number no larger than {hours}.
- "type" is one of: course, video, docs, tutorial, interactive, practice.

Only return the JSON, no markdown."#;
