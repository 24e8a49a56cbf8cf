//! Generative skill extraction — prompts the LLM for skills the dictionary
//! does not know about.
//!
//! Failures here are never fatal to a request: any network, timeout, or
//! parse problem degrades the report to rule-based skills only.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::errors::AppError;
use crate::extraction::prompts::SKILL_EXTRACT_PROMPT_TEMPLATE;
use crate::extraction::SkillSource;
use crate::llm_client::{extract_json_object, strip_json_fences, LlmClient, LlmError};

pub struct LlmSkillExtractor {
    llm: LlmClient,
    timeout: Duration,
}

impl LlmSkillExtractor {
    pub fn new(llm: LlmClient, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    async fn call_model(&self, text: &str) -> Result<String, LlmError> {
        let prompt = SKILL_EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", text);
        let response = tokio::time::timeout(self.timeout, self.llm.call(&prompt))
            .await
            .map_err(|_| LlmError::Timeout)??;
        response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

#[async_trait]
impl SkillSource for LlmSkillExtractor {
    async fn extract(&self, text: &str) -> Result<BTreeSet<String>, AppError> {
        if text.trim().is_empty() {
            return Ok(BTreeSet::new());
        }
        match self.call_model(text).await {
            Ok(raw) => Ok(parse_skills(&raw)),
            Err(e) => {
                warn!("generative skill extraction failed: {e}");
                Ok(BTreeSet::new())
            }
        }
    }
}

/// Recovers the skill list from raw model output.
///
/// Tolerates code fences and stray prose around the JSON object. A payload
/// with no `skills` list, or output with no parseable JSON at all, yields an
/// empty set — malformed model output must never abort the pipeline.
pub fn parse_skills(raw: &str) -> BTreeSet<String> {
    let cleaned = strip_json_fences(raw);

    let value: serde_json::Value = match serde_json::from_str(cleaned) {
        Ok(v) => v,
        Err(_) => {
            let Some(object) = extract_json_object(cleaned) else {
                warn!("no JSON object found in model output");
                return BTreeSet::new();
            };
            match serde_json::from_str(object) {
                Ok(v) => v,
                Err(e) => {
                    warn!("model output is not valid JSON: {e}");
                    return BTreeSet::new();
                }
            }
        }
    };

    match value.get("skills").and_then(|v| v.as_array()) {
        Some(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect(),
        None => BTreeSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(skills: BTreeSet<String>) -> Vec<String> {
        skills.into_iter().collect()
    }

    #[test]
    fn test_parse_clean_json() {
        let skills = parse_skills(r#"{"skills": ["rust", "tokio"]}"#);
        assert_eq!(sorted(skills), vec!["rust", "tokio"]);
    }

    #[test]
    fn test_parse_fenced_json_folds_case_and_dedupes() {
        let raw = "```json\n{\"skills\": [\"Python\", \"Docker\", \"python\"]}\n```";
        let skills = parse_skills(raw);
        assert_eq!(sorted(skills), vec!["docker", "python"]);
    }

    #[test]
    fn test_parse_json_buried_in_prose() {
        let raw = "Sure! Here is the result:\n{\"skills\": [\"sql\"]}\nLet me know if you need more.";
        assert_eq!(sorted(parse_skills(raw)), vec!["sql"]);
    }

    #[test]
    fn test_missing_skills_key_yields_empty() {
        assert!(parse_skills(r#"{"languages": ["rust"]}"#).is_empty());
    }

    #[test]
    fn test_non_list_skills_yields_empty() {
        assert!(parse_skills(r#"{"skills": "rust"}"#).is_empty());
    }

    #[test]
    fn test_non_json_output_yields_empty() {
        assert!(parse_skills("I could not find any skills, sorry.").is_empty());
    }

    #[test]
    fn test_non_string_entries_are_skipped() {
        let skills = parse_skills(r#"{"skills": ["rust", 42, null, "go"]}"#);
        assert_eq!(sorted(skills), vec!["go", "rust"]);
    }

    #[test]
    fn test_whitespace_entries_are_dropped() {
        let skills = parse_skills(r#"{"skills": ["  rust  ", "   "]}"#);
        assert_eq!(sorted(skills), vec!["rust"]);
    }
}
