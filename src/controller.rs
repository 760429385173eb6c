use crate::error::ClientError;
use crate::models::Recommendation;

/// Request lifecycle for a single submission.
/// `Idle` is only the initial state and is never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Transient UI state: one query, at most one in-flight request, and at most
/// one of `answer`/`error` present at any time.
#[derive(Debug, Default)]
pub struct App {
    pub query: String,
    pub state: RequestState,
    pub answer: Option<Recommendation>,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// A submission is allowed when no request is in flight and the query is
    /// not just whitespace.
    pub fn can_submit(&self) -> bool {
        self.state != RequestState::Pending && !self.query.trim().is_empty()
    }

    /// Start a submission: move to Pending, drop any previous result, and
    /// hand back the question to send. Returns `None` with no side effects
    /// while a request is already in flight or the query is empty.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.state = RequestState::Pending;
        self.answer = None;
        self.error = None;
        Some(self.query.clone())
    }

    /// Settle the in-flight request. Failure detail is collapsed into a fixed
    /// user-facing message; callers log the underlying error.
    pub fn complete(&mut self, result: Result<Recommendation, ClientError>) {
        match result {
            Ok(recommendation) => {
                self.answer = Some(recommendation);
                self.state = RequestState::Succeeded;
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                self.state = RequestState::Failed;
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
