//! End-to-end skill extraction: both sources run concurrently over the same
//! text, then their completed results are merged.

use tracing::info;

use crate::errors::AppError;
use crate::extraction::combine::{combine, ExtractionResult};
use crate::extraction::SkillSource;

/// Runs both extractors over the resume text and merges their results.
///
/// Empty text short-circuits to an empty report without invoking either
/// source. A phrase-matcher initialization failure propagates; the
/// generative source absorbs its own failures and contributes an empty set.
pub async fn extract_skills(
    rule_source: &dyn SkillSource,
    llm_source: &dyn SkillSource,
    text: &str,
) -> Result<ExtractionResult, AppError> {
    if text.trim().is_empty() {
        return Ok(ExtractionResult::default());
    }

    let (rule_skills, llm_skills) =
        tokio::join!(rule_source.extract(text), llm_source.extract(text));
    let rule_skills = rule_skills?;
    let llm_skills = llm_skills?;

    info!(
        rule_count = rule_skills.len(),
        llm_count = llm_skills.len(),
        "skill extraction complete"
    );

    Ok(combine(rule_skills, llm_skills))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeSet;

    struct FixedSource(Vec<&'static str>);

    #[async_trait]
    impl SkillSource for FixedSource {
        async fn extract(&self, _text: &str) -> Result<BTreeSet<String>, AppError> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    /// Stand-in for a generative source whose call failed: by contract it
    /// returns an empty set rather than an error.
    struct DegradedSource;

    #[async_trait]
    impl SkillSource for DegradedSource {
        async fn extract(&self, _text: &str) -> Result<BTreeSet<String>, AppError> {
            Ok(BTreeSet::new())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl SkillSource for FailingSource {
        async fn extract(&self, _text: &str) -> Result<BTreeSet<String>, AppError> {
            Err(AppError::Initialization("matcher build failed".to_string()))
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl SkillSource for PanickingSource {
        async fn extract(&self, _text: &str) -> Result<BTreeSet<String>, AppError> {
            panic!("source must not be invoked for empty text");
        }
    }

    #[tokio::test]
    async fn test_empty_text_invokes_neither_source() {
        let result = extract_skills(&PanickingSource, &PanickingSource, "  \n ")
            .await
            .unwrap();
        assert_eq!(result, ExtractionResult::default());
    }

    #[tokio::test]
    async fn test_merges_both_sources() {
        let rule = FixedSource(vec!["python", "sql"]);
        let llm = FixedSource(vec!["docker", "python"]);
        let result = extract_skills(&rule, &llm, "some resume text").await.unwrap();
        assert_eq!(result.rule_based_skills, vec!["python", "sql"]);
        assert_eq!(result.llm_skills, vec!["docker", "python"]);
        assert_eq!(result.all_skills, vec!["docker", "python", "sql"]);
    }

    #[tokio::test]
    async fn test_degraded_llm_keeps_rule_skills() {
        let rule = FixedSource(vec!["machine learning", "python"]);
        let result = extract_skills(&rule, &DegradedSource, "text").await.unwrap();
        assert_eq!(result.rule_based_skills, vec!["machine learning", "python"]);
        assert!(result.llm_skills.is_empty());
        assert_eq!(result.all_skills, result.rule_based_skills);
    }

    #[tokio::test]
    async fn test_rule_source_failure_propagates() {
        let llm = FixedSource(vec!["docker"]);
        let err = extract_skills(&FailingSource, &llm, "text").await.unwrap_err();
        assert!(matches!(err, AppError::Initialization(_)));
    }

    #[tokio::test]
    async fn test_union_invariant_holds() {
        let rule = FixedSource(vec!["b", "a"]);
        let llm = FixedSource(vec!["c", "b"]);
        let result = extract_skills(&rule, &llm, "text").await.unwrap();

        let mut expected: Vec<String> = result
            .rule_based_skills
            .iter()
            .chain(result.llm_skills.iter())
            .cloned()
            .collect();
        expected.sort();
        expected.dedup();
        assert_eq!(result.all_skills, expected);
    }
}
