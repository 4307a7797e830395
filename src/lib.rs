//! # audit-report - markdown audit reports from labeled issues
//!
//! Audit findings live as issues in a tracker, tagged with labels such as
//! `finding`, `impact:high` and `likelihood:medium`. This crate classifies
//! those issues into severity-scored records and renders them into a single,
//! deterministic markdown report.
//!
//! ## Pipeline
//!
//! ```text
//! RawIssue -> classify -> ClassifiedIssue -> render -> markdown
//! ```
//!
//! Both steps are pure and never fail: unknown labels degrade to unrated
//! entries and an empty input renders an empty document.
//!
//! ## Quick Start
//!
//! ```bash
//! # Render a report for every issue labeled "audit"
//! audit-report generate acme/vault audit -o reports/audit.md
//!
//! # Inspect classification without rendering
//! audit-report classify acme/vault audit
//! ```
//!
//! ## Modules
//!
//! - [`classify`]: Label vocabulary and severity matrix
//! - [`report`]: Grouping, ordering and markdown templating
//! - [`model`]: Issue, rating and metadata types
//! - [`config`]: Metadata file loading
//! - [`github`]: GitHub issues client
//! - [`cli`]: Command-line interface definitions and handlers

/// Label classification: categories, ratings and severity.
pub mod classify;

/// Command-line interface definitions using clap.
pub mod cli;

/// Report metadata loading.
///
/// Reads `.audit.json` and fills in defaults for missing fields.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ReportError` enum and `Result<T>` type alias.
pub mod error;

/// GitHub REST client for fetching labeled issues.
pub mod github;

pub mod logging;

/// Data models for issues, ratings and report metadata.
pub mod model;

/// Markdown report rendering.
pub mod report;

/// Input validation utilities.
pub mod validation;

pub use classify::classify;
pub use report::render;
