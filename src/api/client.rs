use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::ServerConfig;

use super::error::SummarizeError;
use super::types::{
    ErrorBody, FileUpload, SelectedFile, SummaryRequest, SummaryResponse, FIELD_FILE,
    FIELD_SUMMARY_TYPE, FIELD_TEXT_INPUT,
};

/// Path of the summarization endpoint, relative to the server base URL.
pub const SUMMARIZE_PATH: &str = "/summarize";

/// Anything that can turn a [`SummaryRequest`] into a summary.
///
/// The form controller only sees this trait, so tests can swap the HTTP
/// client for an in-memory fake.
#[async_trait]
pub trait SummaryService: Send + Sync {
    async fn summarize(&self, request: SummaryRequest) -> Result<SummaryResponse, SummarizeError>;
}

/// Client for `POST /summarize`.
pub struct HttpSummaryClient {
    client: Client,
    endpoint: String,
}

impl HttpSummaryClient {
    pub fn new(config: &ServerConfig) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&config.base_url),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryService for HttpSummaryClient {
    async fn summarize(&self, request: SummaryRequest) -> Result<SummaryResponse, SummarizeError> {
        let has_file = request.file.is_some();
        let text_chars = request.text_input.chars().count();
        let summary_type = request.summary_type.clone();

        tracing::debug!(
            url = %self.endpoint,
            summary_type = %summary_type,
            has_file,
            text_chars,
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(build_form(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            status = status.as_u16(),
            latency_ms,
            response_bytes = body.len(),
            "Summarization response received"
        );

        decode_response(status.as_u16(), status.is_success(), &body)
    }
}

/// Read the selected file into an upload part.
pub async fn read_upload(file: &SelectedFile) -> Result<FileUpload, SummarizeError> {
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|source| SummarizeError::ReadFile {
            path: file.path.clone(),
            source,
        })?;

    Ok(FileUpload {
        file_name: file.name.clone(),
        bytes,
    })
}

/// Build a request from the form's current selection and send it.
///
/// The file, when present, is read here so a missing or unreadable file
/// fails this submission like any other error.
pub async fn summarize_selection(
    service: &dyn SummaryService,
    file: Option<SelectedFile>,
    text_input: String,
    summary_type: String,
) -> Result<SummaryResponse, SummarizeError> {
    let file = match file {
        Some(selected) => Some(read_upload(&selected).await?),
        None => None,
    };

    service
        .summarize(SummaryRequest {
            file,
            text_input,
            summary_type,
        })
        .await
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SUMMARIZE_PATH)
}

fn build_form(request: SummaryRequest) -> Form {
    let mut form = Form::new();
    if let Some(file) = request.file {
        let part = Part::bytes(file.bytes).file_name(file.file_name);
        form = form.part(FIELD_FILE, part);
    }
    form.text(FIELD_TEXT_INPUT, request.text_input)
        .text(FIELD_SUMMARY_TYPE, request.summary_type)
}

fn decode_response(
    status: u16,
    success: bool,
    body: &[u8],
) -> Result<SummaryResponse, SummarizeError> {
    if success {
        return serde_json::from_slice::<SummaryResponse>(body)
            .map_err(|source| SummarizeError::Decode { status, source });
    }

    let error = serde_json::from_slice::<ErrorBody>(body)
        .map_err(|source| SummarizeError::Decode { status, source })?;

    Err(SummarizeError::Server {
        status,
        message: error.error,
    })
}
