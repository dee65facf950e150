use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};
use crate::ui::runtime::InitialInput;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "summarize-tui",
    version,
    about = "Terminal client for a text summarization service"
)]
pub struct Cli {
    /// Config file (default: ~/.config/summarize-tui/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the server base URL
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Override the default summary type
    #[arg(long, value_name = "TYPE")]
    pub summary_type: Option<String>,

    /// Preselect a file to summarize
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Prefill the text input
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Submit once, print the summary to stdout and exit
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Load the config file named by `--config` (or the default one) and
    /// apply the command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(server) = &self.server {
            config.server.base_url = server.clone();
        }

        if let Some(summary_type) = &self.summary_type {
            if !config.form.summary_types.iter().any(|t| t == summary_type) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Summary type '{}' not found. Available: {}",
                        summary_type,
                        config.form.summary_types.join(", ")
                    ),
                });
            }
            config.form.default_summary_type = summary_type.clone();
        }

        config.validate()
    }

    pub fn initial_input(&self) -> InitialInput {
        InitialInput {
            text: self.text.clone(),
            file: self.file.clone(),
        }
    }
}
