//! Skill extraction — two independent sources merged into one report.
//!
//! The deterministic phrase matcher and the generative extractor both
//! implement [`SkillSource`]; the pipeline, the combiner, and the tests
//! depend only on that capability, never on a concrete extractor.

pub mod combine;
pub mod dictionary;
pub mod handlers;
pub mod llm;
pub mod matcher;
pub mod pipeline;
pub mod prompts;

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::errors::AppError;

/// A source of candidate skills extracted from resume text.
///
/// Implementations must be deterministic for identical input where the
/// backend allows it, and must return lowercase skill strings.
#[async_trait]
pub trait SkillSource: Send + Sync {
    async fn extract(&self, text: &str) -> Result<BTreeSet<String>, AppError>;
}
