use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::content::models::PortfolioContent;

/// Content shipped with the binary, used when no content file is configured.
const DEFAULT_CONTENT: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid content: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Loads portfolio content from `path`, or the embedded default when `None`.
pub fn load_content(path: Option<&Path>) -> Result<PortfolioContent, ContentError> {
    let content = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
                path: path.display().to_string(),
                source,
            })?;
            info!("Loaded portfolio content from {}", path.display());
            parse_content(&raw)?
        }
        None => {
            info!("Using embedded portfolio content");
            parse_content(DEFAULT_CONTENT)?
        }
    };

    info!(
        "Content ready: {} projects, {} experience, {} education, {} skill groups",
        content.projects.len(),
        content.experience.len(),
        content.education.len(),
        content.skills.len()
    );
    Ok(content)
}

pub fn parse_content(raw: &str) -> Result<PortfolioContent, ContentError> {
    let content: PortfolioContent = serde_json::from_str(raw)?;
    let issues = validate_content(&content);
    if !issues.is_empty() {
        return Err(ContentError::Invalid(issues));
    }
    Ok(content)
}

/// Collects every structural problem in the content rather than stopping at the first.
///
/// Checks:
/// - project titles are non-empty and unique (they key the rendered cards)
/// - tags are non-empty and contain no commas (tags travel comma-joined in query strings)
/// - experience and education records carry their identifying fields
pub fn validate_content(content: &PortfolioContent) -> Vec<String> {
    let mut issues = Vec::new();

    if content.profile.name.trim().is_empty() {
        issues.push("profile.name is empty".to_string());
    }

    let mut seen_titles = HashSet::new();
    for (i, project) in content.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            issues.push(format!("projects[{i}] has an empty title"));
        } else if !seen_titles.insert(project.title.as_str()) {
            issues.push(format!("duplicate project title '{}'", project.title));
        }

        for tag in &project.tags {
            if tag.trim().is_empty() {
                issues.push(format!("project '{}' has an empty tag", project.title));
            } else if tag.contains(',') {
                issues.push(format!(
                    "project '{}' tag '{tag}' must not contain a comma",
                    project.title
                ));
            }
        }
    }

    for (i, exp) in content.experience.iter().enumerate() {
        if exp.organization.trim().is_empty() || exp.role.trim().is_empty() {
            issues.push(format!("experience[{i}] needs an organization and a role"));
        }
    }

    for (i, edu) in content.education.iter().enumerate() {
        if edu.institution.trim().is_empty() || edu.degree.trim().is_empty() {
            issues.push(format!("education[{i}] needs an institution and a degree"));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn minimal(projects: &str) -> String {
        format!(
            r#"{{
                "profile": {{
                    "name": "Sam Lee", "title": "Analyst", "location": "Austin, TX",
                    "email": "sam@example.com", "phone": "", "linkedin": "", "github": "",
                    "about": "Hi", "resume_filename": "resume.pdf"
                }},
                "projects": {projects}
            }}"#
        )
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let content = load_content(None).unwrap();
        assert!(!content.projects.is_empty());
        assert!(content
            .projects
            .iter()
            .any(|p| p.title == "4D Thunderstorm Visualizations"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", minimal("[]")).unwrap();
        let content = load_content(Some(file.path())).unwrap();
        assert_eq!(content.profile.name, "Sam Lee");
        assert!(content.projects.is_empty());
        assert!(content.skills.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_content(Some(dir.path().join("nope.json").as_path())).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            parse_content("{ not json").unwrap_err(),
            ContentError::Parse(_)
        ));
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        let raw = minimal(
            r#"[
                {"title": "A", "period": "", "summary": ""},
                {"title": "A", "period": "", "summary": ""}
            ]"#,
        );
        match parse_content(&raw).unwrap_err() {
            ContentError::Invalid(issues) => {
                assert_eq!(issues.len(), 1);
                assert!(issues[0].contains("duplicate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_comma_in_tag_rejected() {
        let raw = minimal(r#"[{"title": "A", "period": "", "summary": "", "tags": ["a,b"]}]"#);
        assert!(matches!(
            parse_content(&raw).unwrap_err(),
            ContentError::Invalid(_)
        ));
    }

    #[test]
    fn test_all_issues_collected() {
        let raw = minimal(
            r#"[
                {"title": "", "period": "", "summary": ""},
                {"title": "B", "period": "", "summary": "", "tags": [" "]}
            ]"#,
        );
        match parse_content(&raw).unwrap_err() {
            ContentError::Invalid(issues) => assert_eq!(issues.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
