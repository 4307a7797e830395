use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE_NAME: &str = "audit-report.log";

/// Installs the global subscriber: compact lines on stderr, plus daily
/// rotated JSON lines when `log_file` is given.
///
/// `RUST_LOG` overrides the level chosen by `verbose`. Reports may be
/// written to stdout, so console logs never go there.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, file_error) = match log_file.as_deref().map(file_appender) {
        Some(Ok(appender)) => (
            Some(fmt::layer().with_writer(appender).with_ansi(false).json()),
            None,
        ),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let (Some(path), Some(e)) = (log_file, file_error) {
        tracing::warn!(path = %path.display(), error = %e, "File logging disabled");
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)))
}

fn filter_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("audit_report={level}")
}

/// Splits a log path into the rotation directory and file name prefix.
fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_FILE_NAME));
    (dir, name)
}

fn file_appender(path: &Path) -> std::io::Result<RollingFileAppender> {
    let (dir, name) = split_log_path(path);
    std::fs::create_dir_all(&dir)?;
    Ok(rolling::daily(dir, name))
}
