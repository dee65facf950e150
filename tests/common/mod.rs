//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use summarize_tui::api::{SummarizeError, SummaryRequest, SummaryResponse, SummaryService};
use summarize_tui::clipboard::{ClipboardError, ClipboardSink};
use summarize_tui::ui::events::AppEvent;
use summarize_tui::ui::form::{FormState, SummaryFormController};
use tokio::sync::oneshot;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn summary_types() -> Vec<String> {
    vec!["short".into(), "medium".into(), "long".into()]
}

pub fn summary(text: &str) -> SummaryResponse {
    SummaryResponse {
        summary: text.to_string(),
        summary_type: None,
        original_length: None,
        summary_length: None,
    }
}

// -- Scripted service ---------------------------------------------------------

/// What the scripted service answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Summary(String),
    ServerError { status: u16, message: String },
    Malformed,
}

impl Reply {
    fn into_outcome(self) -> Result<SummaryResponse, SummarizeError> {
        match self {
            Reply::Summary(text) => Ok(summary(&text)),
            Reply::ServerError { status, message } => {
                Err(SummarizeError::Server { status, message })
            }
            Reply::Malformed => {
                let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
                Err(SummarizeError::Decode {
                    status: 502,
                    source,
                })
            }
        }
    }
}

struct Scripted {
    reply: Reply,
    release: Option<oneshot::Receiver<()>>,
}

/// In-memory service that records requests and answers from a script.
///
/// A gated reply is held back until the matching [`Gate`] is opened, which
/// lets tests observe the form while a request is in flight.
#[derive(Default)]
pub struct ScriptedService {
    requests: Mutex<Vec<SummaryRequest>>,
    script: Mutex<VecDeque<Scripted>>,
}

/// Releases one gated reply.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn open(self) {
        let _ = self.0.send(());
    }
}

impl ScriptedService {
    pub fn reply(&self, reply: Reply) {
        self.script.lock().push_back(Scripted {
            reply,
            release: None,
        });
    }

    pub fn gated_reply(&self, reply: Reply) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.script.lock().push_back(Scripted {
            reply,
            release: Some(rx),
        });
        Gate(tx)
    }

    pub fn requests(&self) -> Vec<SummaryRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl SummaryService for ScriptedService {
    async fn summarize(&self, request: SummaryRequest) -> Result<SummaryResponse, SummarizeError> {
        // Recording and popping under one lock keeps request order and
        // script order aligned across concurrent submissions.
        let scripted = {
            let mut script = self.script.lock();
            self.requests.lock().push(request);
            script.pop_front()
        };
        let Some(scripted) = scripted else {
            return Ok(summary("unscripted"));
        };
        if let Some(release) = scripted.release {
            let _ = release.await;
        }
        scripted.reply.into_outcome()
    }
}

// -- Clipboard ----------------------------------------------------------------

/// Clipboard that records what was copied, or fails on demand.
#[derive(Clone, Default)]
pub struct MockClipboard {
    pub contents: Arc<Mutex<Option<String>>>,
    pub fail: bool,
}

impl MockClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl ClipboardSink for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

// -- Controller harness -------------------------------------------------------

/// A form controller wired to a scripted service and mock clipboard.
pub struct Harness {
    pub controller: SummaryFormController,
    pub events: Receiver<AppEvent>,
    pub service: Arc<ScriptedService>,
    pub clipboard: MockClipboard,
    _runtime: tokio::runtime::Runtime,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_clipboard(MockClipboard::default())
    }

    pub fn with_clipboard(clipboard: MockClipboard) -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
        let (tx, rx) = mpsc::channel();
        let service = Arc::new(ScriptedService::default());
        let controller = SummaryFormController::new(
            FormState::new(summary_types(), 1),
            service.clone(),
            Box::new(clipboard.clone()),
            tx,
            runtime.handle().clone(),
        );
        Self {
            controller,
            events: rx,
            service,
            clipboard,
            _runtime: runtime,
        }
    }

    /// Wait for the next finished submission and apply it to the form.
    /// Returns the submission number.
    pub fn apply_next(&mut self) -> u64 {
        let event = self
            .events
            .recv_timeout(Duration::from_secs(5))
            .expect("No submission finished within 5s");
        match event {
            AppEvent::SummaryFinished {
                submission,
                outcome,
            } => {
                self.controller.on_summary_finished(submission, outcome);
                submission
            }
            _ => panic!("Expected SummaryFinished event"),
        }
    }

    /// Block until the service has seen `count` requests.
    pub fn wait_for_requests(&self, count: usize) {
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while self.service.requests().len() < count {
            assert!(
                std::time::Instant::now() < deadline,
                "Service never received {count} requests"
            );
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    pub fn state(&self) -> &FormState {
        self.controller.state()
    }
}
