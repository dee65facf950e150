use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the log file path for interactive mode.
pub const LOG_ENV_VAR: &str = "SUMMARIZE_TUI_LOG";

#[derive(Debug, Error)]
pub enum LogFileError {
    #[error("SUMMARIZE_TUI_LOG points into '{dir}', which does not exist")]
    MissingDirectory { dir: PathBuf },

    #[error("Failed to create log file '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `RUST_LOG` when set, otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `{base}.{timestamp}.{pid}`, so concurrent instances never share a file.
fn unique_log_path(base: &str, timestamp: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}.{}", base, timestamp, pid))
}

fn create_log_file(path: &Path) -> Result<File, LogFileError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.is_dir() {
            return Err(LogFileError::MissingDirectory {
                dir: dir.to_path_buf(),
            });
        }
    }
    File::create(path).map_err(|source| LogFileError::Create {
        path: path.to_path_buf(),
        source,
    })
}

/// Initialize tracing for the interactive TUI.
///
/// Nothing is logged unless `SUMMARIZE_TUI_LOG` names a file path, since
/// log lines would otherwise land on the alternate screen. A bad path is
/// reported once on stderr before the UI starts, and the app runs without
/// logging.
pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_ENV_VAR) else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(&base, timestamp, std::process::id());

    let file = match create_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: logging disabled: {}", err);
            return;
        }
    };

    tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
}

/// Initialize tracing to stderr for `--print` mode.
///
/// Defaults to `warn` so stdout carries only the summary.
pub fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}
