//! Wire types for the `/summarize` endpoint.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Multipart field names expected by the server.
pub const FIELD_FILE: &str = "file";
pub const FIELD_TEXT_INPUT: &str = "text_input";
pub const FIELD_SUMMARY_TYPE: &str = "summary_type";

/// A file attached to a submission, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// File selected in the form but not yet read.
///
/// The bytes are loaded when the submission is sent, not when the file is
/// picked, so the server always sees the file as it is at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

/// One submission to the summarization service.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    /// Sent as the `file` part; omitted entirely when `None`.
    pub file: Option<FileUpload>,
    /// Always sent, possibly empty.
    pub text_input: String,
    /// Always sent, passed through opaquely.
    pub summary_type: String,
}

/// Successful response body.
///
/// Only `summary` is required; the metadata fields are shown when the
/// server includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    #[serde(default)]
    pub summary_type: Option<String>,
    #[serde(default)]
    pub original_length: Option<usize>,
    #[serde(default)]
    pub summary_length: Option<usize>,
}

/// Failure response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
