use crate::api::HttpSummaryClient;
use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::form::{FormState, SummaryFormController};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Values the form starts with (from CLI flags).
#[derive(Debug, Clone, Default)]
pub struct InitialInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

/// Run the interactive form until the user quits.
pub fn run(config: Config, initial: InitialInput) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = HttpSummaryClient::new(&config.server).context("Failed to build HTTP client")?;
    tracing::info!(endpoint = %client.endpoint(), "Starting summary form");

    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let form = SummaryFormController::new(
        FormState::new(config.form.summary_types.clone(), config.form.default_index()),
        Arc::new(client),
        Box::new(ClipboardHandler::new()),
        events.sender(),
        runtime.handle().clone(),
    );
    let mut app = App::new(form, config.server.base_url.clone());

    if let Some(text) = initial.text {
        app.form_mut().on_text_changed(text);
    }
    if let Some(path) = initial.file {
        app.form_mut().select_file(path);
    }

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let size = terminal.size().context("Failed to read terminal size")?;
    app.on_resize(size.width, size.height);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(event) => app.on_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // In-flight submissions are abandoned, not awaited
    runtime.shutdown_background();
    Ok(())
}
