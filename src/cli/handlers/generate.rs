use crate::classify::classify;
use crate::cli::commands::IssueSource;
use crate::config::load_metadata;
use crate::report::{BadgeProfile, RenderOptions, render_at};
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::path::Path;

use super::utils::load_issues;

pub fn handle_generate(
    source: &IssueSource,
    metadata_path: &Path,
    out_file: &Path,
    stdout: bool,
    badge_profile: BadgeProfile,
) -> Result<()> {
    let now = Utc::now();
    let metadata = load_metadata(metadata_path, now)
        .with_context(|| format!("Failed to load metadata from {}", metadata_path.display()))?;

    let raw = load_issues(source)?;
    let issues = classify(&raw);
    let report = render_at(&issues, Some(&metadata), now, RenderOptions { badge_profile });

    if stdout {
        println!("{}", report);
        return Ok(());
    }

    if let Some(parent) = out_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(out_file, &report)
        .with_context(|| format!("Failed to write report to {}", out_file.display()))?;

    tracing::info!(path = %out_file.display(), issues = issues.len(), "Wrote report");
    println!(
        "{} {} ({} issues)",
        "Generated".green(),
        out_file.display().to_string().cyan(),
        issues.len()
    );
    Ok(())
}
