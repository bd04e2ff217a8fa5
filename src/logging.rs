//! File logging.
//!
//! The TUI owns the terminal, so log output goes to a file in the config
//! directory. Verbosity follows `RUST_LOG`, defaulting to `folio=info`.

use crate::error::{FolioError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Directive applied on top of `RUST_LOG`.
pub const DEFAULT_DIRECTIVE: &str = "folio=info";

fn logging_error(path: &Path, reason: impl ToString) -> FolioError {
    FolioError::Logging {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Build the log filter from the environment plus [`DEFAULT_DIRECTIVE`].
pub fn env_filter() -> Result<EnvFilter> {
    let directive = DEFAULT_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| FolioError::Config(format!("bad log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Install the global subscriber, appending to `path`.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| logging_error(path, e))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| logging_error(path, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| logging_error(path, e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio started");
    Ok(())
}
