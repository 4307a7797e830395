//! Ordering of findings within a severity tier.

use crate::model::ClassifiedIssue;
use std::cmp::Ordering;

/// Ranks `a` against `b`: higher impact first, then higher likelihood.
///
/// An unset rating on `a` always ranks `a` first, whatever `b` holds, so the
/// relation is not antisymmetric when both sides are unset. Issues in a rated
/// tier always carry both ratings, which keeps this from mattering in practice.
pub fn rank_findings(a: &ClassifiedIssue, b: &ClassifiedIssue) -> Ordering {
    let (Some(impact_a), Some(impact_b)) = (a.impact, b.impact) else {
        return if a.impact.is_none() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    };
    match impact_b.cmp(&impact_a) {
        Ordering::Equal => {}
        other => return other,
    }

    let (Some(likelihood_a), Some(likelihood_b)) = (a.likelihood, b.likelihood) else {
        return if a.likelihood.is_none() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    };
    likelihood_b.cmp(&likelihood_a)
}

/// Stable insertion sort driven by [`rank_findings`].
///
/// `slice::sort_by` may panic on comparators that are not a total order, so
/// the tier is sorted by hand: each issue moves left past every neighbour it
/// ranks strictly before.
pub fn sort_findings(issues: &mut [&ClassifiedIssue]) {
    for i in 1..issues.len() {
        let mut j = i;
        while j > 0 && rank_findings(issues[j], issues[j - 1]) == Ordering::Less {
            issues.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::severity;
    use crate::model::{Category, Impact, Likelihood};

    fn rated(title: &str, impact: Option<Impact>, likelihood: Option<Likelihood>) -> ClassifiedIssue {
        ClassifiedIssue::new(title, Category::Finding, "body").with_rating(
            impact,
            likelihood,
            severity(impact, likelihood),
        )
    }

    fn titles(issues: &[&ClassifiedIssue]) -> Vec<String> {
        issues.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_higher_impact_first() {
        let a = rated("a", Some(Impact::Medium), Some(Likelihood::High));
        let b = rated("b", Some(Impact::Low), Some(Likelihood::High));
        assert_eq!(rank_findings(&a, &b), Ordering::Less);
        assert_eq!(rank_findings(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_likelihood_breaks_ties() {
        let a = rated("a", Some(Impact::High), Some(Likelihood::Low));
        let b = rated("b", Some(Impact::High), Some(Likelihood::Medium));
        assert_eq!(rank_findings(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_equal_ratings() {
        let a = rated("a", Some(Impact::Low), Some(Likelihood::Low));
        let b = rated("b", Some(Impact::Low), Some(Likelihood::Low));
        assert_eq!(rank_findings(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_unset_impact_ranks_first() {
        let unset = rated("unset", None, Some(Likelihood::Low));
        let high = rated("high", Some(Impact::High), Some(Likelihood::High));
        assert_eq!(rank_findings(&unset, &high), Ordering::Less);
        assert_eq!(rank_findings(&high, &unset), Ordering::Greater);
        // Both unset: the left side still claims first place.
        assert_eq!(rank_findings(&unset, &unset.clone()), Ordering::Less);
    }

    #[test]
    fn test_sort_is_stable_for_equal_ratings() {
        let a = rated("a", Some(Impact::Medium), Some(Likelihood::Medium));
        let b = rated("b", Some(Impact::High), Some(Likelihood::Low));
        let c = rated("c", Some(Impact::Medium), Some(Likelihood::Medium));
        let mut tier = vec![&a, &b, &c];
        sort_findings(&mut tier);
        assert_eq!(titles(&tier), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sort_tolerates_unset_ratings() {
        let a = rated("a", None, None);
        let b = rated("b", Some(Impact::Low), Some(Likelihood::High));
        let c = rated("c", None, None);
        let mut tier = vec![&b, &a, &c];
        sort_findings(&mut tier);
        assert_eq!(titles(&tier), vec!["c", "a", "b"]);
    }
}
