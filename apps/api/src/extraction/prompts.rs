// LLM prompt constants for the extraction module.

/// Skill extraction prompt. Replace `{resume_text}` before sending.
/// The rules mirror what the response parser tolerates anyway: JSON only,
/// lowercase, deduplicated.
pub const SKILL_EXTRACT_PROMPT_TEMPLATE: &str = r#"You are an expert resume parser.

Extract ONLY professional technical skills from the resume.

RULES:
- Return JSON only.
- No explanation.
- No markdown.
- No extra text.
- Remove duplicates.
- Lowercase everything.

FORMAT:
{
  "skills": ["python", "machine learning", "sql"]
}

RESUME:
{resume_text}"#;
