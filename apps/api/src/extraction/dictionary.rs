use std::path::Path;

use crate::errors::AppError;

/// Loads the skill dictionary: one phrase per line, UTF-8, trimmed,
/// lowercased, blank lines dropped.
///
/// A missing resource is a configuration error and must abort matcher
/// initialization — a silently empty dictionary would make the phrase
/// matcher vacuously return no skills.
pub fn load_skills(path: &Path) -> Result<Vec<String>, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::Configuration(format!(
            "skill dictionary not readable at '{}': {e}",
            path.display()
        ))
    })?;

    Ok(raw
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dictionary(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_trims_lowercases_and_skips_blanks() {
        let file = write_dictionary("  Python  \n\nSQL\nMachine Learning\n   \n");
        let skills = load_skills(file.path()).unwrap();
        assert_eq!(skills, vec!["python", "sql", "machine learning"]);
    }

    #[test]
    fn test_load_preserves_line_order() {
        let file = write_dictionary("rust\naxum\ntokio\n");
        let skills = load_skills(file.path()).unwrap();
        assert_eq!(skills, vec!["rust", "axum", "tokio"]);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = load_skills(Path::new("/nonexistent/skills.txt")).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
