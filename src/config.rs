use crate::error::{ReportError, Result};
use crate::model::{DEFAULT_TITLE, ReportMetadata, RepositoryRef};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_METADATA_PATH: &str = "./.audit.json";
pub const DEFAULT_OUT_FILE: &str = "reports/automated.md";

/// Metadata file as written by users. Every field is optional, and a field
/// holding the wrong JSON type is ignored on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataFile {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    /// Epoch seconds; fractional values are accepted.
    #[serde(default, deserialize_with = "lenient")]
    pub start_date: Option<f64>,

    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<RepositoryField>,

    /// Commit hash used with the flat `repository: "<url>"` form.
    #[serde(default, deserialize_with = "lenient")]
    pub commit: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub header: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub footer: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub logo: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub logo_dark: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub logo_light: Option<String>,
}

/// Either `{ "url": ..., "commit": ... }` or a bare URL string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Nested {
        #[serde(default, deserialize_with = "lenient")]
        url: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        commit: Option<String>,
    },
    Url(String),
}

/// Reads a field as `T`, or as absent when it holds another JSON type.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::warn!(value = %value, error = %e, "Ignoring metadata field with unexpected type");
            Ok(None)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl MetadataFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Resolves defaults. `now` stands in for a missing start date.
    pub fn into_metadata(self, now: DateTime<Utc>) -> ReportMetadata {
        let start_date = self
            .start_date
            .filter(|secs| *secs != 0.0)
            .and_then(epoch_to_datetime)
            .unwrap_or(now);

        let (url, commit) = match self.repository {
            Some(RepositoryField::Nested { url, commit }) => (url, commit.or(self.commit)),
            Some(RepositoryField::Url(url)) => (Some(url), self.commit),
            None => (None, None),
        };
        let repository = match (non_empty(url), non_empty(commit)) {
            (Some(url), Some(commit)) => Some(RepositoryRef { url, commit }),
            _ => None,
        };

        ReportMetadata {
            title: non_empty(self.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            repository,
            start_date,
            header: non_empty(self.header),
            footer: non_empty(self.footer),
            logo: non_empty(self.logo),
            logo_dark: non_empty(self.logo_dark),
            logo_light: non_empty(self.logo_light),
        }
    }
}

fn epoch_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Loads report metadata from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_metadata(path: &Path, now: DateTime<Utc>) -> Result<ReportMetadata> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No metadata file, using defaults");
        return Ok(MetadataFile::default().into_metadata(now));
    }
    if !path.is_file() {
        return Err(ReportError::Config(format!(
            "Metadata path is not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let metadata = MetadataFile::parse(&content)?.into_metadata(now);
    tracing::info!(path = %path.display(), title = %metadata.title, "Loaded report metadata");
    Ok(metadata)
}
