use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use crate::config::Config;
use crate::extraction::SkillSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub config: Config,
    /// Deterministic phrase-matching source. An initialization failure here
    /// is fatal to the request.
    pub rule_source: Arc<dyn SkillSource>,
    /// Generative source. Absorbs its own failures and contributes an empty
    /// set instead of erroring.
    pub llm_source: Arc<dyn SkillSource>,
}
