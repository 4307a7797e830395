use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Finding,
    Enhancement,
    Optimization,
    Introduction,
    Conclusion,
    #[default]
    Unknown,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Finding => write!(f, "finding"),
            Category::Enhancement => write!(f, "enhancement"),
            Category::Optimization => write!(f, "optimization"),
            Category::Introduction => write!(f, "introduction"),
            Category::Conclusion => write!(f, "conclusion"),
            Category::Unknown => write!(f, "unknown"),
        }
    }
}

/// Impact rating. Variant order is the ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    /// Upper-case name used on badges.
    pub fn badge_text(self) -> &'static str {
        match self {
            Impact::Low => "LOW",
            Impact::Medium => "MEDIUM",
            Impact::High => "HIGH",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Low => write!(f, "low"),
            Impact::Medium => write!(f, "medium"),
            Impact::High => write!(f, "high"),
        }
    }
}

/// Likelihood rating. Variant order is the ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Likelihood {
    Low,
    Medium,
    High,
}

impl Likelihood {
    pub fn badge_text(self) -> &'static str {
        match self {
            Likelihood::Low => "LOW",
            Likelihood::Medium => "MEDIUM",
            Likelihood::High => "HIGH",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Likelihood::Low => write!(f, "low"),
            Likelihood::Medium => write!(f, "medium"),
            Likelihood::High => write!(f, "high"),
        }
    }
}

/// Severity derived from impact and likelihood.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::None => write!(f, "none"),
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        assert!(Impact::Low < Impact::Medium && Impact::Medium < Impact::High);
        assert!(Likelihood::Low < Likelihood::High);
        assert!(Severity::None < Severity::Low);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_badge_text() {
        assert_eq!(Impact::Medium.badge_text(), "MEDIUM");
        assert_eq!(Likelihood::High.badge_text(), "HIGH");
        assert_eq!(Severity::Critical.to_string(), "critical");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Category::default(), Category::Unknown);
        assert_eq!(Severity::default(), Severity::None);
    }
}
