use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

use summarize_tui::cli::Cli;
use summarize_tui::headless::run_once;
use summarize_tui::logging::{init_stderr_tracing, init_tracing};
use summarize_tui::ui::runtime::run;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print {
        init_stderr_tracing();
    } else {
        init_tracing();
    }

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = if cli.print {
        print_once(&cli, &config)
    } else {
        run(config, cli.initial_input())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn print_once(cli: &Cli, config: &summarize_tui::config::Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match runtime.block_on(run_once(config, cli.initial_input())) {
        Ok(response) => {
            println!("{}", response.summary);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "Print mode submission failed");
            Err(anyhow::anyhow!(err.user_message()))
        }
    }
}
