//! Error taxonomy for summarization requests.

use std::path::PathBuf;
use thiserror::Error;

/// Shown for every failure the server did not describe itself.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Summarization failed: the server could not be reached or sent an unreadable response";

/// Errors that can end a submission.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Server answered non-2xx with an `error` message.
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Connection refused, DNS failure, broken body stream, ...
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the JSON shape the status promised.
    #[error("Malformed response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Selected file could not be read at submit time.
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummarizeError {
    /// True when the message came from the server and is shown verbatim.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, SummarizeError::Server { .. })
    }

    /// Message presented to the user.
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::Server { message, .. } => message.clone(),
            SummarizeError::ReadFile { path, .. } => {
                format!("Could not read the selected file: {}", path.display())
            }
            SummarizeError::Transport(_) | SummarizeError::Decode { .. } => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
