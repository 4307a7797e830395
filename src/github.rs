//! GitHub issue source.

use crate::error::{ReportError, Result};
use crate::model::RawIssue;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK, USER_AGENT};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const PER_PAGE: u32 = 100;
/// Upper bound on followed `next` links (10k issues at 100 per page).
const MAX_PAGES: usize = 100;

#[derive(Debug, Deserialize)]
struct GithubIssue {
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default, deserialize_with = "label_names")]
    labels: Vec<String>,
}

/// Accepts `[{ "name": .. }]` or `["name"]`. Anything that is not an array
/// gives no labels, and entries without a string name are skipped.
fn label_names<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(name) => Some(name),
            Value::Object(mut label) => match label.remove("name") {
                Some(Value::String(name)) => Some(name),
                _ => None,
            },
            _ => None,
        })
        .collect())
}

/// Extracts the `rel="next"` target from a `Link` header.
pub fn next_page_url(link: &str) -> Option<Url> {
    link.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        let is_next = params
            .split(';')
            .any(|p| p.trim().replace(' ', "") == r#"rel="next""#);
        if !is_next {
            return None;
        }
        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        Url::parse(target).ok()
    })
}

/// reqwest is built without a bundled TLS provider; ring is installed once
/// per process. A second install attempt is a no-op.
fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Blocking client for the issues endpoint.
pub struct GithubClient {
    client: Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    pub fn with_base_url(token: Option<&str>, base_url: &str) -> Result<Self> {
        install_crypto_provider();
        let base_url = Url::parse(base_url)
            .map_err(|e| ReportError::Config(format!("Invalid API URL '{}': {}", base_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("audit-report/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ReportError::Config("GitHub token is not a valid header".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, base_url })
    }

    /// Builds the listing URL for `repo` (`owner/repo`), filtered by labels.
    pub fn issues_url(&self, repo: &str, labels: &[String]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("repos/{}/issues", repo))
            .map_err(|e| ReportError::Config(format!("Invalid repository '{}': {}", repo, e)))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("state", "all");
            query.append_pair("per_page", &PER_PAGE.to_string());
            if !labels.is_empty() {
                query.append_pair("labels", &labels.join(","));
            }
        }
        Ok(url)
    }

    /// Fetches all issues (open and closed) of `repo` carrying the labels,
    /// following `Link: rel="next"` across pages. Pull requests are skipped.
    pub fn fetch_issues(&self, repo: &str, labels: &[String]) -> Result<Vec<RawIssue>> {
        let mut next = Some(self.issues_url(repo, labels)?);
        tracing::info!(repo = %repo, labels = ?labels, "Fetching issues from GitHub");

        let mut issues = Vec::new();
        let mut pages = 0;
        while let Some(url) = next.take() {
            if pages == MAX_PAGES {
                tracing::warn!(pages, "Stopped following issue pages; report may be incomplete");
                break;
            }
            pages += 1;

            let (payload, link) = self.fetch_page(url)?;
            next = link.as_deref().and_then(next_page_url);
            issues.extend(issues_from_payload(payload));
        }

        tracing::info!(count = issues.len(), pages, "Fetched issues");
        Ok(issues)
    }

    fn fetch_page(&self, url: Url) -> Result<(Value, Option<String>)> {
        tracing::debug!(url = %url, "Fetching issue page");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ReportError::Github {
                status: status.as_u16(),
                message,
            });
        }

        let link = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok((response.json()?, link))
    }
}

/// Converts a GitHub issues listing into raw issues. Anything that is not a
/// JSON array yields no issues.
pub fn issues_from_payload(payload: Value) -> Vec<RawIssue> {
    let Value::Array(entries) = payload else {
        tracing::warn!("GitHub returned a non-array issue listing");
        return Vec::new();
    };

    entries
        .into_iter()
        .filter(|entry| entry.get("pull_request").is_none())
        .filter_map(|entry| match serde_json::from_value::<GithubIssue>(entry) {
            Ok(issue) => Some(RawIssue {
                title: issue.title,
                body: issue.body.filter(|b| !b.is_empty()),
                labels: issue.labels,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed issue entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_conversion() {
        let payload = json!([
            {
                "title": "Overflow in mint",
                "body": "Details",
                "labels": [{ "name": "finding" }, { "name": "impact:high" }]
            },
            {
                "title": "A pull request",
                "body": "PR body",
                "labels": [],
                "pull_request": { "url": "https://example.invalid" }
            },
            { "title": "No body", "body": null },
            { "title": "Empty body", "body": "", "labels": ["enhancement"] }
        ]);

        let issues = issues_from_payload(payload);
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].labels, vec!["finding", "impact:high"]);
        assert_eq!(issues[0].body.as_deref(), Some("Details"));
        assert_eq!(issues[1].body, None);
        assert!(issues[1].labels.is_empty());
        assert_eq!(issues[2].body, None);
        assert_eq!(issues[2].labels, vec!["enhancement"]);
    }

    #[test]
    fn test_non_array_payload() {
        assert!(issues_from_payload(json!({ "message": "Not Found" })).is_empty());
    }

    #[test]
    fn test_malformed_entry_skipped() {
        let issues = issues_from_payload(json!([{ "body": "no title" }, { "title": "ok" }]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].title, "ok");
    }

    #[test]
    fn test_labels_not_an_array() {
        let issues = issues_from_payload(json!([
            { "title": "string labels", "body": "b", "labels": "oops" },
            { "title": "null labels", "body": "b", "labels": null },
            { "title": "object labels", "body": "b", "labels": { "name": "finding" } }
        ]));
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.labels.is_empty()));
    }

    #[test]
    fn test_label_entries_without_name_skipped() {
        let issues = issues_from_payload(json!([{
            "title": "mixed",
            "body": "b",
            "labels": [
                { "name": "finding" },
                { "name": null },
                { "color": "ff0000" },
                { "name": 5 },
                7,
                "impact:high"
            ]
        }]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].labels, vec!["finding", "impact:high"]);
    }

    #[test]
    fn test_next_page_url() {
        let link = r#"<https://api.github.com/repositories/1/issues?page=2>; rel="next", <https://api.github.com/repositories/1/issues?page=5>; rel="last""#;
        assert_eq!(
            next_page_url(link).unwrap().as_str(),
            "https://api.github.com/repositories/1/issues?page=2"
        );
    }

    #[test]
    fn test_next_page_url_on_last_page() {
        let link = r#"<https://api.github.com/repositories/1/issues?page=1>; rel="first", <https://api.github.com/repositories/1/issues?page=4>; rel="prev""#;
        assert!(next_page_url(link).is_none());
        assert!(next_page_url("").is_none());
    }

    #[test]
    fn test_issues_url() {
        let client = GithubClient::new(None).unwrap();
        let url = client
            .issues_url("acme/vault", &["finding".to_string(), "impact:high".to_string()])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/acme/vault/issues?state=all&per_page=100&labels=finding%2Cimpact%3Ahigh"
        );
    }

    #[test]
    fn test_custom_base_url() {
        let client = GithubClient::with_base_url(Some("t0ken"), "https://ghe.example.com/api/v3/")
            .unwrap();
        let url = client.issues_url("acme/vault", &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/acme/vault/issues?state=all&per_page=100"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            GithubClient::with_base_url(None, "not a url"),
            Err(ReportError::Config(_))
        ));
    }
}
