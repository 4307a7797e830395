use crate::classify::classify;
use crate::cli::commands::IssueSource;
use crate::model::{Category, ClassifiedIssue, Severity};
use anyhow::Result;
use colored::Colorize;

use super::utils::load_issues;

pub fn handle_classify(source: &IssueSource, json: bool) -> Result<()> {
    let raw = load_issues(source)?;
    let issues = classify(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else {
        print_classified(&issues);
    }
    Ok(())
}

fn print_classified(issues: &[ClassifiedIssue]) {
    if issues.is_empty() {
        println!("No issues found.");
        return;
    }

    for issue in issues {
        let rating = match (issue.impact, issue.likelihood) {
            (Some(impact), Some(likelihood)) => format!("{}/{}", impact, likelihood),
            (Some(impact), None) => format!("{}/-", impact),
            (None, Some(likelihood)) => format!("-/{}", likelihood),
            (None, None) => "-".to_string(),
        };
        println!(
            "{} {} {} {}",
            format_category(issue.category),
            format_severity(issue.severity),
            rating.dimmed(),
            issue.title
        );
    }
}

fn format_category(category: Category) -> colored::ColoredString {
    let text = format!("[{}]", category);
    match category {
        Category::Finding => text.magenta(),
        Category::Enhancement => text.blue(),
        Category::Optimization => text.green(),
        Category::Introduction | Category::Conclusion => text.white(),
        Category::Unknown => text.dimmed(),
    }
}

fn format_severity(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Critical => "critical".red().bold(),
        Severity::High => "high".red(),
        Severity::Medium => "medium".yellow(),
        Severity::Low => "low".white(),
        Severity::None => "none".dimmed(),
    }
}
