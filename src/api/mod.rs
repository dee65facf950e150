//! Client side of the summarization HTTP contract.
//!
//! ```text
//! POST {base_url}/summarize   multipart: file?, text_input, summary_type
//!   2xx  → {"summary": "..."}
//!   else → {"error": "..."}
//! ```

mod client;
mod error;
mod types;

pub use client::{
    read_upload, summarize_selection, HttpSummaryClient, SummaryService, SUMMARIZE_PATH,
};
pub use error::{SummarizeError, GENERIC_FAILURE_MESSAGE};
pub use types::{
    ErrorBody, FileUpload, SelectedFile, SummaryRequest, SummaryResponse, FIELD_FILE,
    FIELD_SUMMARY_TYPE, FIELD_TEXT_INPUT,
};
