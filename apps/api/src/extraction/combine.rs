use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The combined skill report: both source views plus their union, each a
/// sorted, deduplicated list of lowercase strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub rule_based_skills: Vec<String>,
    pub llm_skills: Vec<String>,
    pub all_skills: Vec<String>,
}

/// Merges the two skill sets. Pure function, no I/O.
///
/// `all_skills` is always the sorted, deduplicated union of the inputs; both
/// inputs are already lowercase so no tie-breaking is needed.
pub fn combine(rule_skills: BTreeSet<String>, llm_skills: BTreeSet<String>) -> ExtractionResult {
    let all_skills: BTreeSet<String> = rule_skills.union(&llm_skills).cloned().collect();

    ExtractionResult {
        rule_based_skills: rule_skills.into_iter().collect(),
        llm_skills: llm_skills.into_iter().collect(),
        all_skills: all_skills.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_union_is_sorted_and_deduplicated() {
        let result = combine(set(&["python", "sql"]), set(&["docker", "python"]));
        assert_eq!(result.rule_based_skills, vec!["python", "sql"]);
        assert_eq!(result.llm_skills, vec!["docker", "python"]);
        assert_eq!(result.all_skills, vec!["docker", "python", "sql"]);
    }

    #[test]
    fn test_both_empty() {
        let result = combine(BTreeSet::new(), BTreeSet::new());
        assert_eq!(result, ExtractionResult::default());
    }

    #[test]
    fn test_one_side_empty_union_equals_other_side() {
        let result = combine(set(&["rust"]), BTreeSet::new());
        assert_eq!(result.all_skills, result.rule_based_skills);
        assert!(result.llm_skills.is_empty());

        let result = combine(BTreeSet::new(), set(&["go", "k8s"]));
        assert_eq!(result.all_skills, result.llm_skills);
        assert!(result.rule_based_skills.is_empty());
    }

    #[test]
    fn test_recombining_the_union_is_idempotent() {
        let first = combine(set(&["python", "sql"]), set(&["docker"]));
        let union: BTreeSet<String> = first.all_skills.iter().cloned().collect();
        let second = combine(union, BTreeSet::new());
        assert_eq!(second.all_skills, first.all_skills);
    }

    #[test]
    fn test_serializes_with_expected_field_names() {
        let result = combine(set(&["python"]), set(&["docker"]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["rule_based_skills"][0], "python");
        assert_eq!(json["llm_skills"][0], "docker");
        assert_eq!(json["all_skills"], serde_json::json!(["docker", "python"]));
    }
}
