use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Unknown";

/// Reviewed repository and the commit the review was pinned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub url: String,
    pub commit: String,
}

impl RepositoryRef {
    pub fn commit_url(&self) -> String {
        format!("{}/commit/{}", self.url, self.commit)
    }
}

/// Report-level data wrapped around the rendered issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryRef>,

    pub start_date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_dark: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_light: Option<String>,
}

impl ReportMetadata {
    pub fn new(title: impl Into<String>, start_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            repository: None,
            start_date,
            header: None,
            footer: None,
            logo: None,
            logo_dark: None,
            logo_light: None,
        }
    }

    pub fn with_repository(mut self, url: impl Into<String>, commit: impl Into<String>) -> Self {
        self.repository = Some(RepositoryRef {
            url: url.into(),
            commit: commit.into(),
        });
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_logos(
        mut self,
        logo: Option<String>,
        logo_dark: Option<String>,
        logo_light: Option<String>,
    ) -> Self {
        self.logo = logo;
        self.logo_dark = logo_dark;
        self.logo_light = logo_light;
        self
    }

    pub fn has_logo(&self) -> bool {
        self.logo.is_some() || self.logo_dark.is_some() || self.logo_light.is_some()
    }
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, Utc::now())
    }
}
