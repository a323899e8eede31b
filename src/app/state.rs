//! Application state

use super::selector::ModelSelectorState;
use super::viewport::{ScrollLock, Viewport};
use crate::analysis::{Analyzer, SimulatedAnalyzer};
use crate::catalog::{ModelCatalog, ModelDescriptor};
use crate::config::{Action, Config};
use crate::editor::{Edit, EditorState};
use crate::route::{Route, SessionId};
use crate::submission::{Completion, Dispatch, SubmissionController};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Overlay currently capturing input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys go to the active view
    #[default]
    Normal,
    /// Model picker overlay is open
    ModelSelector,
    /// Help overlay is open
    Help,
}

/// State owned by the input view while it is mounted
#[derive(Debug)]
pub struct InputScreen {
    /// Text being written
    pub editor: EditorState,
    /// Model picker
    pub selector: ModelSelectorState,
    /// Validation and analysis state
    pub submission: SubmissionController,
}

impl InputScreen {
    /// Fresh editor and submission state for one mount of the input view
    #[must_use]
    pub fn new(max_length: usize, analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            editor: EditorState::new(max_length),
            selector: ModelSelectorState::new(),
            submission: SubmissionController::new(analyzer),
        }
    }
}

/// The mounted view and the state it owns
#[derive(Debug)]
pub enum Screen {
    /// Landing view
    Home,
    /// Editor and model selection
    Input(Box<InputScreen>),
    /// Feedback results
    Feedback(SessionId),
    /// Rewrite results
    Rewrite(SessionId),
}

impl Screen {
    /// Route that addresses this view
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Input(_) => Route::Input,
            Self::Feedback(id) => Route::Feedback(id.clone()),
            Self::Rewrite(id) => Route::Rewrite(id.clone()),
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Models offered for analysis
    pub catalog: Arc<ModelCatalog>,

    /// Runs analyses for every input view mounted by this app
    analyzer: Arc<dyn Analyzer>,

    /// Mounted view
    pub screen: Screen,

    /// Current overlay mode
    pub mode: Mode,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Session of the most recent successful analysis
    pub last_session: Option<SessionId>,

    /// Scroll offset of the results views
    pub results_scroll: u16,

    /// Largest offset the results view can use, from the last drawn frame
    scroll_limit: u16,

    /// Terminal viewport shared by all views
    pub viewport: Viewport,

    /// Lock held by the mounted view, if it disables scrolling
    scroll_lock: Option<ScrollLock>,

    /// Ticks since start (spinner animation)
    pub tick: usize,
}

impl App {
    /// Create an app that analyzes with the simulated analyzer
    #[must_use]
    pub fn new(config: Config, catalog: ModelCatalog) -> Self {
        let analyzer = Arc::new(SimulatedAnalyzer::new(config.analysis_delay()));
        Self::with_analyzer(config, catalog, analyzer)
    }

    /// Create an app with the built-in catalog
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::new(config, ModelCatalog::builtin())
    }

    /// Create an app around a custom analyzer
    #[must_use]
    pub fn with_analyzer(
        config: Config,
        catalog: ModelCatalog,
        analyzer: Arc<dyn Analyzer>,
    ) -> Self {
        let viewport = Viewport::new();
        let scroll_lock = Route::Home.locks_scroll().then(|| viewport.lock());
        Self {
            config,
            catalog: Arc::new(catalog),
            analyzer,
            screen: Screen::Home,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            last_session: None,
            results_scroll: 0,
            scroll_limit: u16::MAX,
            viewport,
            scroll_lock,
            tick: 0,
        }
    }

    /// Route of the mounted view
    #[must_use]
    pub fn route(&self) -> Route {
        self.screen.route()
    }

    /// Unmount the current view and mount the one `route` addresses
    ///
    /// The status line belongs to the outgoing view and is cleared with it.
    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route(), to = %route, "Navigating");
        // The outgoing view lets go of the viewport before the next one mounts
        self.scroll_lock = None;
        self.clear_status();
        let locks_scroll = route.locks_scroll();
        self.screen = match route {
            Route::Home => Screen::Home,
            Route::Input => Screen::Input(Box::new(InputScreen::new(
                self.config.max_length,
                Arc::clone(&self.analyzer),
            ))),
            Route::Feedback(id) => Screen::Feedback(id),
            Route::Rewrite(id) => Screen::Rewrite(id),
        };
        if locks_scroll {
            self.scroll_lock = Some(self.viewport.lock());
        }
        self.mode = Mode::Normal;
        self.results_scroll = 0;
    }

    /// Input view state, when mounted
    #[must_use]
    pub fn input(&self) -> Option<&InputScreen> {
        match &self.screen {
            Screen::Input(input) => Some(&**input),
            _ => None,
        }
    }

    /// Mutable input view state, when mounted
    pub fn input_mut(&mut self) -> Option<&mut InputScreen> {
        match &mut self.screen {
            Screen::Input(input) => Some(&mut **input),
            _ => None,
        }
    }

    /// Whether keys should reach the editor first
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Normal && self.input().is_some()
    }

    /// Descriptor of the model chosen in the input view
    #[must_use]
    pub fn selected_model(&self) -> Option<&ModelDescriptor> {
        self.input()
            .and_then(|input| input.selector.selected(&self.catalog))
    }

    /// Choose a model by id.
    ///
    /// The submission state records the raw id and drops any standing error.
    /// Returns whether the id named a catalog entry.
    pub fn select_model(&mut self, id: &str) -> bool {
        let Screen::Input(input) = &mut self.screen else {
            return false;
        };
        let found = input.selector.select(&self.catalog, id).is_some();
        input.submission.select_model(id);
        found
    }

    /// Apply an edit to the editor, keeping the submission state informed
    pub fn edit(&mut self, f: impl FnOnce(&mut EditorState) -> Edit) -> Edit {
        let Some(input) = self.input_mut() else {
            return Edit::Rejected;
        };
        let outcome = f(&mut input.editor);
        if outcome.is_accepted() {
            input.submission.text_changed(input.editor.text());
        }
        outcome
    }

    /// Insert pasted text at the cursor
    pub fn paste(&mut self, text: &str) {
        let max_length = self.config.max_length;
        if !self.edit(|editor| editor.insert_str(text)).is_accepted() && self.input().is_some() {
            self.set_status(format!("Paste would exceed {max_length} characters"));
        }
    }

    /// Ask the input view to analyze its text.
    ///
    /// Does nothing while the submit action is disabled.
    pub fn submit(&mut self) {
        let Some(InputScreen {
            editor, submission, ..
        }) = self.input_mut()
        else {
            return;
        };
        if !submission.can_submit(editor.text()) {
            debug!("Submit is disabled");
            return;
        }
        match submission.submit(editor.text()) {
            Ok(Dispatch::Started) => {
                let model = submission.selected_model().unwrap_or_default().to_string();
                self.set_status(format!("Analyzing with {model}..."));
            }
            Ok(Dispatch::AlreadyBusy) => {}
            Err(err) => debug!("Submit rejected: {err}"),
        }
    }

    /// Periodic work: advance the spinner and collect analysis results
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let Some(completion) = self.input_mut().and_then(|input| input.submission.poll()) else {
            return;
        };
        match completion {
            Completion::Succeeded(session) => {
                let feedback = self.config.keys.format_keys(Action::OpenFeedback);
                let rewrite = self.config.keys.format_keys(Action::OpenRewrite);
                self.set_status(format!(
                    "Analysis complete. {feedback} opens feedback, {rewrite} the rewrite"
                ));
                self.last_session = Some(session);
            }
            Completion::Failed(err) => {
                warn!("Analysis failed: {err}");
                self.clear_status();
            }
        }
    }

    /// Open the model picker over the input view
    pub fn open_model_selector(&mut self) {
        let Screen::Input(input) = &mut self.screen else {
            return;
        };
        input.selector.open(&self.catalog);
        self.mode = Mode::ModelSelector;
    }

    /// Choose the highlighted model and close the picker
    pub fn confirm_model_selection(&mut self) {
        let highlighted = self
            .input()
            .and_then(|input| input.selector.highlighted(&self.catalog))
            .map(|model| model.id.clone());
        if let Some(id) = highlighted {
            self.select_model(&id);
        }
        self.exit_mode();
    }

    /// Open a results view for the last successful analysis
    pub fn open_results(&mut self, route: fn(SessionId) -> Route) {
        match self.last_session.clone() {
            Some(session) => self.navigate(route(session)),
            None => self.set_status("No analysis yet"),
        }
    }

    /// Go to the parent view
    pub fn back(&mut self) {
        match self.screen {
            Screen::Home => {}
            Screen::Input(_) => self.navigate(Route::Home),
            Screen::Feedback(_) | Screen::Rewrite(_) => self.navigate(Route::Input),
        }
    }

    /// Scroll the results view up, unless the viewport is locked
    pub fn scroll_up(&mut self, amount: u16) {
        if self.viewport.is_locked() {
            return;
        }
        self.results_scroll = self.results_scroll.saturating_sub(amount);
    }

    /// Scroll the results view down, unless the viewport is locked
    pub fn scroll_down(&mut self, amount: u16) {
        if self.viewport.is_locked() {
            return;
        }
        self.results_scroll = self
            .results_scroll
            .saturating_add(amount)
            .min(self.scroll_limit);
    }

    /// Bound results scrolling to what the current frame can show
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.results_scroll = self.results_scroll.min(limit);
    }

    /// Enter help mode
    pub const fn enter_help(&mut self) {
        self.mode = Mode::Help;
    }

    /// Return to normal mode
    pub const fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Set a status message to display
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
