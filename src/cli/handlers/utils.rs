use crate::cli::commands::IssueSource;
use crate::github::GithubClient;
use crate::model::RawIssue;
use crate::validation::{validate_labels, validate_repository};
use anyhow::{Context, Result};
use std::path::Path;

/// Loads raw issues for `source`, either from a local file or from GitHub.
pub fn load_issues(source: &IssueSource) -> Result<Vec<RawIssue>> {
    validate_repository(&source.repository)?;
    validate_labels(&source.labels)?;

    match &source.issues {
        Some(path) => read_issues_file(path, &source.labels),
        None => {
            let client = GithubClient::with_base_url(source.token.as_deref(), &source.api_url)?;
            client
                .fetch_issues(&source.repository, &source.labels)
                .with_context(|| format!("Failed to fetch issues for {}", source.repository))
        }
    }
}

/// Reads a JSON array of raw issues and keeps the ones carrying all of
/// `labels`, as GitHub's `labels=a,b` filter does.
pub fn read_issues_file(path: &Path, labels: &[String]) -> Result<Vec<RawIssue>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read issues file {}", path.display()))?;
    let mut issues: Vec<RawIssue> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse issues file {}", path.display()))?;

    let total = issues.len();
    issues.retain(|issue| issue.has_all_labels(labels));
    tracing::info!(
        path = %path.display(),
        total,
        kept = issues.len(),
        "Loaded issues from file"
    );
    Ok(issues)
}
