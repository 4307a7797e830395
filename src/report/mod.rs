//! Markdown report rendering.
//!
//! The document is a list of blocks joined by blank lines:
//!
//! 1. metadata preamble (header, title, logos, repository, dates)
//! 2. the first introduction body
//! 3. the findings heading and findings by severity tier
//! 4. enhancements, then optimizations
//! 5. the first conclusion body
//! 6. the footer
//!
//! Blocks without content are left out. Findings, enhancements and
//! optimizations share one running counter.

mod badge;
mod ordering;

pub use badge::{BadgeColor, BadgeProfile, badge, issue_badges};
pub use ordering::{rank_findings, sort_findings};

use crate::model::{Category, ClassifiedIssue, ReportMetadata, Severity};
use chrono::{DateTime, Utc};

const BLOCK_SEPARATOR: &str = "\n\n";
const FINDINGS_HEADING: &str = r#"<h2 align="center">Findings</h2>"#;
const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Severity tiers shown in the findings section, in output order, and
/// whether the tier is re-ordered by [`rank_findings`].
const FINDING_TIERS: &[(Severity, bool)] = &[
    (Severity::Critical, false),
    (Severity::High, true),
    (Severity::Medium, true),
    (Severity::Low, true),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub badge_profile: BadgeProfile,
}

/// Renders the report, stamping it with the current time.
pub fn render(issues: &[ClassifiedIssue], metadata: Option<&ReportMetadata>) -> String {
    render_at(issues, metadata, Utc::now(), RenderOptions::default())
}

/// Renders the report with an explicit "updated on" time.
pub fn render_at(
    issues: &[ClassifiedIssue],
    metadata: Option<&ReportMetadata>,
    now: DateTime<Utc>,
    options: RenderOptions,
) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if let Some(metadata) = metadata {
        push_preamble(&mut blocks, metadata, now);
    }

    if let Some(intro) = first_of(issues, Category::Introduction) {
        blocks.push(intro.body.clone());
    }

    let tiers: Vec<Vec<&ClassifiedIssue>> = FINDING_TIERS
        .iter()
        .map(|(severity, ranked)| {
            let mut tier: Vec<&ClassifiedIssue> = issues
                .iter()
                .filter(|i| i.is_finding() && i.severity == *severity)
                .collect();
            if *ranked {
                sort_findings(&mut tier);
            }
            tier
        })
        .collect();

    if tiers.iter().any(|tier| !tier.is_empty()) {
        blocks.push(FINDINGS_HEADING.to_string());
    }

    let numbered = tiers
        .into_iter()
        .flatten()
        .chain(of_category(issues, Category::Enhancement))
        .chain(of_category(issues, Category::Optimization));

    for (index, issue) in numbered.enumerate() {
        blocks.push(format_issue(index + 1, issue, options.badge_profile));
    }

    if let Some(conclusion) = first_of(issues, Category::Conclusion) {
        blocks.push(conclusion.body.clone());
    }

    if let Some(footer) = metadata.and_then(|m| m.footer.as_deref()) {
        blocks.push(footer.to_string());
    }

    tracing::debug!(blocks = blocks.len(), issues = issues.len(), "Rendered report");
    blocks.join(BLOCK_SEPARATOR)
}

fn of_category(
    issues: &[ClassifiedIssue],
    category: Category,
) -> impl Iterator<Item = &ClassifiedIssue> {
    issues.iter().filter(move |i| i.category == category)
}

fn first_of(issues: &[ClassifiedIssue], category: Category) -> Option<&ClassifiedIssue> {
    of_category(issues, category).next()
}

fn push_preamble(blocks: &mut Vec<String>, metadata: &ReportMetadata, now: DateTime<Utc>) {
    if let Some(header) = &metadata.header {
        blocks.push(header.clone());
    }

    blocks.push(format!(r#"<h1 align="center">{}</h1>"#, metadata.title));

    if metadata.has_logo() {
        blocks.push(logo_block(metadata));
    }

    if let Some(repo) = &metadata.repository {
        blocks.push(format!(
            "We reviewed the [{url}]({url}) repository at commit [{commit}]({commit_url}).",
            url = repo.url,
            commit = repo.commit,
            commit_url = repo.commit_url(),
        ));
    }

    blocks.push(format!(
        "The review started on *{}*.",
        format_date(metadata.start_date)
    ));
    blocks.push(format!("This report was updated on *{}*.", format_date(now)));
}

fn logo_block(metadata: &ReportMetadata) -> String {
    let mut lines = vec![r#"<p align="center">"#.to_string(), "<picture>".to_string()];
    if let Some(dark) = &metadata.logo_dark {
        lines.push(format!(
            r#"<source media="(prefers-color-scheme: dark)" srcset="{dark}">"#
        ));
    }
    if let Some(light) = &metadata.logo_light {
        lines.push(format!(
            r#"<source media="(prefers-color-scheme: light)" srcset="{light}">"#
        ));
    }
    if let Some(logo) = &metadata.logo {
        lines.push(format!(r#"<img src="{logo}">"#));
    }
    lines.push("</picture>".to_string());
    lines.push("</p>".to_string());
    lines.join("\n")
}

fn format_issue(index: usize, issue: &ClassifiedIssue, profile: BadgeProfile) -> String {
    [
        format!("### {}. {}", index, issue.title),
        issue_badges(issue, profile),
        issue.body.replace('\r', ""),
    ]
    .join(BLOCK_SEPARATOR)
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}
