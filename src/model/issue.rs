use super::types::{Category, Impact, Likelihood, Severity};
use serde::{Deserialize, Serialize};

/// An issue as handed over by the tracker, before classification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawIssue {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default)]
    pub labels: Vec<String>,
}

impl RawIssue {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            labels: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// True when the issue carries every label in `wanted`.
    pub fn has_all_labels(&self, wanted: &[String]) -> bool {
        wanted.iter().all(|l| self.labels.contains(l))
    }
}

/// A typed report entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedIssue {
    pub title: String,
    pub category: Category,
    pub severity: Severity,
    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<Likelihood>,
}

impl ClassifiedIssue {
    pub fn new(title: impl Into<String>, category: Category, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category,
            severity: Severity::None,
            body: body.into(),
            impact: None,
            likelihood: None,
        }
    }

    pub fn with_rating(
        mut self,
        impact: Option<Impact>,
        likelihood: Option<Likelihood>,
        severity: Severity,
    ) -> Self {
        self.impact = impact;
        self.likelihood = likelihood;
        self.severity = severity;
        self
    }

    pub fn is_finding(&self) -> bool {
        self.category == Category::Finding
    }
}
