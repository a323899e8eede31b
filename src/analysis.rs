//! The analysis operation behind the "Analyze" action.
//!
//! Only a simulated analyzer exists: it waits for a configured delay and
//! logs the request. There is no result payload yet.

use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Text and model handed to an analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Text to analyze.
    pub text: String,
    /// Catalog id of the chosen model.
    pub model_id: String,
}

/// Why an analysis did not complete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The analyzer reported a failure.
    #[error("analysis failed: {0}")]
    Failed(String),
    /// The worker stopped without reporting a result.
    #[error("analysis worker exited without reporting a result")]
    Interrupted,
    /// The worker thread could not be started.
    #[error("failed to start analysis worker: {0}")]
    Spawn(String),
}

/// Something that can analyze a piece of text with a given model.
///
/// Implementations run on a worker thread and may block.
pub trait Analyzer: Send + Sync + fmt::Debug {
    /// Analyze `request`, blocking until done.
    ///
    /// # Errors
    ///
    /// Returns an error if the analysis fails.
    fn analyze(&self, request: &AnalysisRequest) -> Result<(), AnalysisError>;
}

/// Stand-in analyzer that sleeps for `delay` and succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedAnalyzer {
    delay: Duration,
}

impl SimulatedAnalyzer {
    /// Create a simulated analyzer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The simulated network delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAnalyzer {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl Analyzer for SimulatedAnalyzer {
    fn analyze(&self, request: &AnalysisRequest) -> Result<(), AnalysisError> {
        info!(
            model = %request.model_id,
            chars = request.text.chars().count(),
            "Analyzing text"
        );
        std::thread::sleep(self.delay);
        info!(model = %request.model_id, "Analysis complete");
        Ok(())
    }
}
