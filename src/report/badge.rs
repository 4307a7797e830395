use crate::model::{Category, ClassifiedIssue, Impact, Likelihood};
use std::fmt;

const BADGE_BASE_URL: &str = "https://img.shields.io/badge";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Red,
    Orange,
    Yellow,
    Blue,
    Green,
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeColor::Red => write!(f, "red"),
            BadgeColor::Orange => write!(f, "orange"),
            BadgeColor::Yellow => write!(f, "yellow"),
            BadgeColor::Blue => write!(f, "blue"),
            BadgeColor::Green => write!(f, "green"),
        }
    }
}

/// Color scheme for rating badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeProfile {
    /// High red, medium orange, low yellow.
    #[default]
    Standard,
    /// High red, medium yellow, low blue.
    Muted,
}

/// Per-tier colors, indexed low, medium, high.
const STANDARD_TIERS: [BadgeColor; 3] = [BadgeColor::Yellow, BadgeColor::Orange, BadgeColor::Red];
const MUTED_TIERS: [BadgeColor; 3] = [BadgeColor::Blue, BadgeColor::Yellow, BadgeColor::Red];

const CATEGORY_BADGES: &[(Category, &str, BadgeColor)] = &[
    (Category::Enhancement, "ENHANCEMENT", BadgeColor::Blue),
    (Category::Optimization, "OPTIMIZATION", BadgeColor::Green),
];

impl BadgeProfile {
    fn tiers(self) -> &'static [BadgeColor; 3] {
        match self {
            BadgeProfile::Standard => &STANDARD_TIERS,
            BadgeProfile::Muted => &MUTED_TIERS,
        }
    }

    pub fn impact_color(self, impact: Impact) -> BadgeColor {
        self.tiers()[impact as usize]
    }

    pub fn likelihood_color(self, likelihood: Likelihood) -> BadgeColor {
        self.tiers()[likelihood as usize]
    }
}

pub fn badge(subject: &str, status: &str, color: BadgeColor) -> String {
    format!("![Badge]({BADGE_BASE_URL}/{subject}-{status}-{color}.svg)")
}

/// Badge line shown under an issue heading. Findings get impact and
/// likelihood badges (an unset rating shows as low); enhancements and
/// optimizations get a fixed label; everything else gets nothing.
pub fn issue_badges(issue: &ClassifiedIssue, profile: BadgeProfile) -> String {
    if issue.category == Category::Finding {
        let impact = issue.impact.unwrap_or(Impact::Low);
        let likelihood = issue.likelihood.unwrap_or(Likelihood::Low);
        return format!(
            "{} {}",
            badge("IMPACT", impact.badge_text(), profile.impact_color(impact)),
            badge(
                "LIKELIHOOD",
                likelihood.badge_text(),
                profile.likelihood_color(likelihood)
            )
        );
    }

    CATEGORY_BADGES
        .iter()
        .find(|(category, _, _)| *category == issue.category)
        .map(|(_, text, color)| badge("", text, *color))
        .unwrap_or_default()
}
