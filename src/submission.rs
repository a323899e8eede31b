//! Submission controller: validates the input screen and runs one analysis
//! at a time on a worker thread.
//!
//! The busy flag is the pending result channel itself. It is released when a
//! result arrives or when the worker goes away without sending one (a panic
//! inside the analyzer drops the sender), so it can never stay set after the
//! worker is gone.

use crate::analysis::{AnalysisError, AnalysisRequest, Analyzer};
use crate::route::SessionId;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use thiserror::Error;
use tracing::{debug, error, info};

/// User-facing reasons a submission did not go through.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Text is empty or only whitespace.
    #[error("Please enter some text to analyze")]
    EmptyText,
    /// No model has been selected.
    #[error("Please select a model for analysis")]
    NoModel,
    /// The analysis itself failed.
    #[error("An error occurred during analysis. Please try again.")]
    AnalysisFailed,
}

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight, no error showing.
    Idle,
    /// An analysis is in flight.
    Busy,
    /// Nothing in flight and an error is showing.
    Error(SubmitError),
}

/// What a submit request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Validation passed and the analysis started.
    Started,
    /// An analysis was already running; the request was ignored.
    AlreadyBusy,
}

/// Result of a finished analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The analysis succeeded; results are addressed by this session.
    Succeeded(SessionId),
    /// The analysis failed.
    Failed(AnalysisError),
}

/// Per-screen submission state.
#[derive(Debug)]
pub struct SubmissionController {
    analyzer: Arc<dyn Analyzer>,
    selected_model: Option<String>,
    error: Option<SubmitError>,
    pending: Option<Receiver<Result<(), AnalysisError>>>,
}

impl SubmissionController {
    /// Create an idle controller that will run analyses on `analyzer`.
    #[must_use]
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            analyzer,
            selected_model: None,
            error: None,
            pending: None,
        }
    }

    /// Currently selected model id.
    #[must_use]
    pub fn selected_model(&self) -> Option<&str> {
        self.selected_model.as_deref()
    }

    /// Last recorded error.
    #[must_use]
    pub const fn error(&self) -> Option<SubmitError> {
        self.error
    }

    /// Whether an analysis is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_busy() {
            Phase::Busy
        } else if let Some(err) = self.error {
            Phase::Error(err)
        } else {
            Phase::Idle
        }
    }

    /// Record the model chosen in the selector.
    ///
    /// Any standing error is cleared, whatever its cause. An empty id counts
    /// as no selection.
    pub fn select_model(&mut self, id: &str) {
        self.selected_model = (!id.is_empty()).then(|| id.to_string());
        self.error = None;
    }

    /// Note an edit to the text.
    ///
    /// Clears an `EmptyText` error once the text is no longer blank; other
    /// errors stand until the model changes or a submit succeeds.
    pub fn text_changed(&mut self, text: &str) {
        if self.error == Some(SubmitError::EmptyText) && !text.trim().is_empty() {
            self.error = None;
        }
    }

    /// Whether the submit action should be offered for `text`.
    #[must_use]
    pub fn can_submit(&self, text: &str) -> bool {
        !self.is_busy() && !text.trim().is_empty() && self.selected_model.is_some()
    }

    /// Validate `text` and the selection, then start the analysis.
    ///
    /// # Errors
    ///
    /// Returns `EmptyText` for blank text (checked first) or `NoModel` when
    /// nothing is selected; the error is also recorded for display.
    pub fn submit(&mut self, text: &str) -> Result<Dispatch, SubmitError> {
        if self.is_busy() {
            debug!("Submit ignored: analysis already in flight");
            return Ok(Dispatch::AlreadyBusy);
        }

        let model_id = match self.validate(text) {
            Ok(model_id) => model_id,
            Err(err) => {
                self.error = Some(err);
                return Err(err);
            }
        };

        self.error = None;
        let request = AnalysisRequest {
            text: text.to_string(),
            model_id,
        };
        self.start(request);
        Ok(Dispatch::Started)
    }

    fn validate(&self, text: &str) -> Result<String, SubmitError> {
        if text.trim().is_empty() {
            return Err(SubmitError::EmptyText);
        }
        self.selected_model.clone().ok_or(SubmitError::NoModel)
    }

    fn start(&mut self, request: AnalysisRequest) {
        info!(model = %request.model_id, "Starting analysis");
        let (tx, rx) = mpsc::channel();
        let analyzer = Arc::clone(&self.analyzer);

        let spawned = thread::Builder::new()
            .name("clarifi-analysis".to_string())
            .spawn(move || {
                let result = analyzer.analyze(&request);
                // The receiver is gone if the screen unmounted meanwhile.
                let _ = tx.send(result);
            });

        match spawned {
            Ok(_) => self.pending = Some(rx),
            Err(e) => {
                self.finish(Err(AnalysisError::Spawn(e.to_string())));
            }
        }
    }

    /// Collect the analysis result if it has arrived. Never blocks.
    pub fn poll(&mut self) -> Option<Completion> {
        let result = match self.pending.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(AnalysisError::Interrupted),
        };
        Some(self.finish(result))
    }

    /// Block until the in-flight analysis finishes.
    ///
    /// Returns `None` when nothing is in flight.
    pub fn wait(&mut self) -> Option<Completion> {
        let result = self
            .pending
            .as_ref()?
            .recv()
            .unwrap_or(Err(AnalysisError::Interrupted));
        Some(self.finish(result))
    }

    fn finish(&mut self, result: Result<(), AnalysisError>) -> Completion {
        self.pending = None;
        match result {
            Ok(()) => {
                let session = SessionId::generate();
                info!(%session, "Analysis finished");
                Completion::Succeeded(session)
            }
            Err(err) => {
                error!("Error during analysis: {err}");
                self.error = Some(SubmitError::AnalysisFailed);
                Completion::Failed(err)
            }
        }
    }
}
