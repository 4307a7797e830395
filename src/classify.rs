//! Label classification.
//!
//! Turns tracker labels into typed ratings. Every label family is resolved
//! with the same first-match scan, and unknown or missing labels degrade to
//! `None` instead of failing.

use crate::model::{Category, ClassifiedIssue, Impact, Likelihood, RawIssue, Severity};

pub const IMPACT_PREFIX: &str = "impact:";
pub const LIKELIHOOD_PREFIX: &str = "likelihood:";

/// Category vocabulary. Labels must match exactly.
pub const CATEGORY_LABELS: &[(&str, Category)] = &[
    ("finding", Category::Finding),
    ("enhancement", Category::Enhancement),
    ("optimization", Category::Optimization),
    ("introduction", Category::Introduction),
    ("conclusion", Category::Conclusion),
];

pub const IMPACT_LABELS: &[(&str, Impact)] = &[
    ("high", Impact::High),
    ("medium", Impact::Medium),
    ("low", Impact::Low),
];

pub const LIKELIHOOD_LABELS: &[(&str, Likelihood)] = &[
    ("high", Likelihood::High),
    ("medium", Likelihood::Medium),
    ("low", Likelihood::Low),
];

/// Rating policy. The low-impact row intentionally repeats the medium-impact row.
pub const SEVERITY_MATRIX: &[(Impact, Likelihood, Severity)] = &[
    (Impact::High, Likelihood::High, Severity::Critical),
    (Impact::High, Likelihood::Medium, Severity::High),
    (Impact::High, Likelihood::Low, Severity::Medium),
    (Impact::Medium, Likelihood::High, Severity::High),
    (Impact::Medium, Likelihood::Medium, Severity::Medium),
    (Impact::Medium, Likelihood::Low, Severity::Low),
    (Impact::Low, Likelihood::High, Severity::High),
    (Impact::Low, Likelihood::Medium, Severity::Medium),
    (Impact::Low, Likelihood::Low, Severity::Low),
];

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Returns the first label accepted by `select`, mapped through it.
fn first_label<'a, T>(labels: &'a [String], select: impl Fn(&'a str) -> Option<T>) -> Option<T> {
    labels.iter().find_map(|l| select(l.as_str()))
}

/// Resolves the first `impact:` label. A first label with an unknown value
/// yields `None` even if a later one would parse.
pub fn impact_from_labels(labels: &[String]) -> Option<Impact> {
    first_label(labels, |l| l.strip_prefix(IMPACT_PREFIX))
        .and_then(|value| lookup(IMPACT_LABELS, value))
}

pub fn likelihood_from_labels(labels: &[String]) -> Option<Likelihood> {
    first_label(labels, |l| l.strip_prefix(LIKELIHOOD_PREFIX))
        .and_then(|value| lookup(LIKELIHOOD_LABELS, value))
}

pub fn category_from_labels(labels: &[String]) -> Category {
    first_label(labels, |l| lookup(CATEGORY_LABELS, l)).unwrap_or_default()
}

pub fn severity(impact: Option<Impact>, likelihood: Option<Likelihood>) -> Severity {
    let (Some(impact), Some(likelihood)) = (impact, likelihood) else {
        return Severity::None;
    };
    SEVERITY_MATRIX
        .iter()
        .find(|(i, l, _)| *i == impact && *l == likelihood)
        .map(|(_, _, s)| *s)
        .unwrap_or_default()
}

/// Classifies a single issue. Returns `None` when the issue has no body.
pub fn classify_issue(issue: &RawIssue) -> Option<ClassifiedIssue> {
    let body = issue.body.as_deref().filter(|b| !b.is_empty())?;

    let impact = impact_from_labels(&issue.labels);
    let likelihood = likelihood_from_labels(&issue.labels);
    let category = category_from_labels(&issue.labels);

    Some(
        ClassifiedIssue::new(&issue.title, category, body.trim_end_matches('\r'))
            .with_rating(impact, likelihood, severity(impact, likelihood)),
    )
}

/// Classifies issues in input order, dropping the ones without a body.
pub fn classify(issues: &[RawIssue]) -> Vec<ClassifiedIssue> {
    let classified: Vec<ClassifiedIssue> = issues
        .iter()
        .filter_map(|issue| {
            let parsed = classify_issue(issue);
            if parsed.is_none() {
                tracing::debug!(title = %issue.title, "Dropping issue without body");
            }
            parsed
        })
        .collect();

    tracing::debug!(
        received = issues.len(),
        classified = classified.len(),
        "Classified issues"
    );
    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn finding(items: &[&str]) -> RawIssue {
        RawIssue::new("Reentrancy in withdraw")
            .with_body("details")
            .with_labels(items.iter().copied())
    }

    #[test]
    fn test_drops_issue_without_body() {
        let issues = vec![RawIssue::new("No body").with_labels(["finding"])];
        assert!(classify(&issues).is_empty());
    }

    #[test]
    fn test_drops_issue_with_empty_body() {
        let issues = vec![RawIssue::new("Empty").with_body("")];
        assert!(classify(&issues).is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let issues = vec![
            RawIssue::new("first").with_body("a"),
            RawIssue::new("skipped"),
            RawIssue::new("second").with_body("b"),
        ];
        let titles: Vec<_> = classify(&issues).into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_severity_matrix() {
        use Impact as I;
        use Likelihood as L;
        assert_eq!(severity(Some(I::High), Some(L::High)), Severity::Critical);
        assert_eq!(severity(Some(I::High), Some(L::Medium)), Severity::High);
        assert_eq!(severity(Some(I::High), Some(L::Low)), Severity::Medium);
        assert_eq!(severity(Some(I::Medium), Some(L::High)), Severity::High);
        assert_eq!(severity(Some(I::Medium), Some(L::Medium)), Severity::Medium);
        assert_eq!(severity(Some(I::Medium), Some(L::Low)), Severity::Low);
        assert_eq!(severity(Some(I::Low), Some(L::High)), Severity::High);
        assert_eq!(severity(Some(I::Low), Some(L::Medium)), Severity::Medium);
        assert_eq!(severity(Some(I::Low), Some(L::Low)), Severity::Low);
    }

    #[test]
    fn test_severity_none_when_rating_missing() {
        assert_eq!(severity(None, Some(Likelihood::High)), Severity::None);
        assert_eq!(severity(Some(Impact::High), None), Severity::None);
        assert_eq!(severity(None, None), Severity::None);
    }

    #[test]
    fn test_matrix_covers_every_pair() {
        assert_eq!(SEVERITY_MATRIX.len(), 9);
    }

    #[test]
    fn test_classify_finding() {
        let parsed = classify_issue(&finding(&["finding", "impact:high", "likelihood:high"])).unwrap();
        assert_eq!(parsed.category, Category::Finding);
        assert_eq!(parsed.impact, Some(Impact::High));
        assert_eq!(parsed.likelihood, Some(Likelihood::High));
        assert_eq!(parsed.severity, Severity::Critical);
    }

    #[test]
    fn test_unrecognized_impact_degrades() {
        let parsed =
            classify_issue(&finding(&["finding", "impact:extreme", "likelihood:high"])).unwrap();
        assert_eq!(parsed.impact, None);
        assert_eq!(parsed.likelihood, Some(Likelihood::High));
        assert_eq!(parsed.severity, Severity::None);
    }

    #[test]
    fn test_first_prefixed_label_wins() {
        let l = labels(&["impact:bogus", "impact:high"]);
        assert_eq!(impact_from_labels(&l), None);

        let l = labels(&["likelihood:low", "likelihood:high"]);
        assert_eq!(likelihood_from_labels(&l), Some(Likelihood::Low));
    }

    #[test]
    fn test_category_first_match_in_label_order() {
        assert_eq!(
            category_from_labels(&labels(&["optimization", "finding"])),
            Category::Optimization
        );
        assert_eq!(
            category_from_labels(&labels(&["bug", "conclusion", "introduction"])),
            Category::Conclusion
        );
    }

    #[test]
    fn test_category_unknown() {
        assert_eq!(category_from_labels(&labels(&["bug"])), Category::Unknown);
        assert_eq!(category_from_labels(&labels(&["Finding"])), Category::Unknown);
        assert_eq!(category_from_labels(&[]), Category::Unknown);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let l = labels(&["impact:High", "likelihood:HIGH"]);
        assert_eq!(impact_from_labels(&l), None);
        assert_eq!(likelihood_from_labels(&l), None);
    }

    #[test]
    fn test_ratings_kept_for_non_findings() {
        let parsed =
            classify_issue(&finding(&["enhancement", "impact:low", "likelihood:low"])).unwrap();
        assert_eq!(parsed.category, Category::Enhancement);
        assert_eq!(parsed.impact, Some(Impact::Low));
        assert_eq!(parsed.severity, Severity::Low);
    }

    #[test]
    fn test_trailing_carriage_returns_stripped() {
        let issue = RawIssue::new("t").with_body("line one\r\nline two\r\r");
        let parsed = classify_issue(&issue).unwrap();
        assert_eq!(parsed.body, "line one\r\nline two");
    }
}
