use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub form: FormConfig,
}

/// Where the summarization service lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the service (scheme + host + port), e.g. "http://localhost:8080".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    ///
    /// No total request timeout is applied; the loading indicator stays up
    /// until the server answers.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Options offered by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Values offered by the summary-type selector, in display order.
    #[serde(default = "default_summary_types")]
    pub summary_types: Vec<String>,
    /// Summary type selected on startup.
    #[serde(default = "default_summary_type")]
    pub default_summary_type: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_summary_types() -> Vec<String> {
    vec!["short".to_string(), "medium".to_string(), "long".to_string()]
}

fn default_summary_type() -> String {
    "medium".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            summary_types: default_summary_types(),
            default_summary_type: default_summary_type(),
        }
    }
}

impl FormConfig {
    /// Index of the default summary type, falling back to the first option.
    pub fn default_index(&self) -> usize {
        self.summary_types
            .iter()
            .position(|t| t == &self.default_summary_type)
            .unwrap_or(0)
    }
}
