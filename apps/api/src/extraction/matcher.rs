//! Rule-based skill extraction — case-insensitive phrase matching against
//! the skill dictionary. Exact, fast, and fully deterministic.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::dictionary::load_skills;
use crate::extraction::SkillSource;

/// Case-insensitive phrase index over the skill dictionary.
///
/// Keys are space-joined token sequences; values are the canonical dictionary
/// phrase that produced them, so a match on "CI / CD" still reports "ci/cd".
pub struct PhraseMatcher {
    phrases: HashMap<String, String>,
    max_phrase_tokens: usize,
}

impl PhraseMatcher {
    pub fn new(skills: &[String]) -> Self {
        let mut phrases = HashMap::new();
        let mut max_phrase_tokens = 0;

        for skill in skills {
            let tokens = tokenize(skill);
            if tokens.is_empty() {
                continue;
            }
            max_phrase_tokens = max_phrase_tokens.max(tokens.len());
            phrases
                .entry(tokens.join(" "))
                .or_insert_with(|| skill.clone());
        }

        Self {
            phrases,
            max_phrase_tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Scans contiguous token spans and collects every span whose lowercased
    /// surface form equals a dictionary phrase. Matches respect token
    /// boundaries — "java" never fires inside "javascript".
    pub fn find_skills(&self, text: &str) -> BTreeSet<String> {
        let tokens = tokenize(text);
        let mut found = BTreeSet::new();

        for start in 0..tokens.len() {
            let mut span = String::new();
            for token in tokens
                .iter()
                .skip(start)
                .take(self.max_phrase_tokens.min(tokens.len() - start))
            {
                if !span.is_empty() {
                    span.push(' ');
                }
                span.push_str(token);
                if let Some(canonical) = self.phrases.get(&span) {
                    found.insert(canonical.clone());
                }
            }
        }

        found
    }
}

/// Lowercases and splits text into word tokens.
///
/// Symbol-bearing skill names survive as single tokens: "c++", "c#", "f#",
/// "node.js". Everything else splits on whitespace and punctuation, so the
/// matcher can only ever match whole tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            current.extend(c.to_lowercase());
        } else if (c == '+' || c == '#') && !current.is_empty() {
            current.push(c);
        } else if c == '.'
            && !current.is_empty()
            && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric())
        {
            current.push('.');
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Deterministic skill extraction backed by a lazily built phrase index.
///
/// The index is built at most once per process: concurrent first calls race
/// on the `OnceCell` and the losers observe the winner's fully built index.
/// Identical input text always yields an identical result set.
pub struct RuleBasedExtractor {
    skills_path: PathBuf,
    matcher: OnceCell<PhraseMatcher>,
}

impl RuleBasedExtractor {
    pub fn new(skills_path: impl Into<PathBuf>) -> Self {
        Self {
            skills_path: skills_path.into(),
            matcher: OnceCell::new(),
        }
    }

    /// Constructs an extractor around a pre-built matcher, skipping the
    /// dictionary load. Intended for tests.
    pub fn with_matcher(matcher: PhraseMatcher) -> Self {
        Self {
            skills_path: PathBuf::new(),
            matcher: OnceCell::with_value(matcher),
        }
    }

    fn matcher(&self) -> Result<&PhraseMatcher, AppError> {
        self.matcher.get_or_try_init(|| {
            let skills = load_skills(&self.skills_path)?;
            let matcher = PhraseMatcher::new(&skills);
            if matcher.is_empty() {
                return Err(AppError::Initialization(format!(
                    "skill dictionary at '{}' produced an empty phrase index",
                    self.skills_path.display()
                )));
            }
            info!("Phrase matcher initialized with {} skills", matcher.len());
            Ok(matcher)
        })
    }
}

#[async_trait]
impl SkillSource for RuleBasedExtractor {
    async fn extract(&self, text: &str) -> Result<BTreeSet<String>, AppError> {
        if text.trim().is_empty() {
            return Ok(BTreeSet::new());
        }
        Ok(self.matcher()?.find_skills(text))
    }
}
