//! Input validation for command arguments.

use crate::error::{ReportError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a single label filter.
pub const MAX_LABEL_LENGTH: usize = 100;

static REPO_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?/[A-Za-z0-9._-]+$")
        .expect("repository slug pattern is valid")
});

/// Validates a repository in the `owner/repo` form.
pub fn validate_repository(repo: &str) -> Result<()> {
    if repo.is_empty() {
        return Err(ReportError::Validation(
            "Repository cannot be empty".to_string(),
        ));
    }
    if !REPO_SLUG.is_match(repo) || repo.ends_with("/.") || repo.ends_with("/..") {
        return Err(ReportError::Validation(format!(
            "Repository must look like 'owner/repo', got '{}'",
            repo
        )));
    }
    Ok(())
}

/// Validates label filters passed on the command line.
pub fn validate_labels(labels: &[String]) -> Result<()> {
    for label in labels {
        if label.trim().is_empty() {
            return Err(ReportError::Validation("Label cannot be empty".to_string()));
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(ReportError::Validation(format!(
                "Label exceeds maximum length of {} characters",
                MAX_LABEL_LENGTH
            )));
        }
        if label.contains(',') {
            return Err(ReportError::Validation(format!(
                "Label cannot contain a comma: {}",
                label
            )));
        }
    }
    Ok(())
}
