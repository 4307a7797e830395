//! Data models for audit reports.
//!
//! This module defines the core data structures:
//!
//! - [`RawIssue`]: An issue as fetched from the tracker (title, optional body, labels)
//! - [`ClassifiedIssue`]: A typed, severity-scored report entry
//! - [`Category`]: Entry kind (finding, enhancement, optimization, introduction, conclusion)
//! - [`Impact`], [`Likelihood`], [`Severity`]: Ordinal ratings
//! - [`ReportMetadata`]: Title, repository reference, dates, header/footer and logos

mod issue;
mod metadata;
mod types;

pub use issue::{ClassifiedIssue, RawIssue};
pub use metadata::{DEFAULT_TITLE, ReportMetadata, RepositoryRef};
pub use types::{Category, Impact, Likelihood, Severity};
