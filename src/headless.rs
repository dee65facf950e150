//! One-shot mode: submit once, no terminal UI.

use crate::api::{
    summarize_selection, HttpSummaryClient, SelectedFile, SummarizeError, SummaryResponse,
};
use crate::config::Config;
use crate::ui::runtime::InitialInput;

/// Send a single submission built from the CLI input and wait for it.
///
/// Uses the same request assembly as the form: the file is optional,
/// the text is always sent (empty when not given).
pub async fn run_once(
    config: &Config,
    input: InitialInput,
) -> Result<SummaryResponse, SummarizeError> {
    let client = HttpSummaryClient::new(&config.server)?;
    let summary_type = config.form.default_summary_type.clone();
    let file = input.file.map(SelectedFile::new);
    let text_input = input.text.unwrap_or_default();

    tracing::debug!(
        endpoint = %client.endpoint(),
        summary_type = %summary_type,
        has_file = file.is_some(),
        "Submitting in print mode"
    );

    summarize_selection(&client, file, text_input, summary_type).await
}
