//! Lifecycle of one viewer page.

use crate::error::ViewerError;
use crate::pipeline::Rendered;

use super::query::ViewMode;
use super::share::share_url;

/// Ticket identifying one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// State of one view: `idle → loading → (success | failure)`.
///
/// Every [`ViewState::submit`] starts a new generation. Completions carrying
/// an older generation are dropped, so the view always shows the outcome
/// of the latest submission regardless of completion order.
#[derive(Debug, Clone)]
pub struct ViewState {
    mode: ViewMode,
    share_base: String,
    input: String,
    loading: bool,
    error: Option<String>,
    share_url: Option<String>,
    content: Option<Rendered>,
    generation: u64,
}

impl ViewState {
    /// Creates an idle view.
    ///
    /// # Arguments
    ///
    /// * `mode`: Presentation selected by the query parameters
    /// * `share_base`: Origin and path used to build share links
    pub fn new(mode: ViewMode, share_base: impl Into<String>) -> Self {
        Self {
            mode,
            share_base: share_base.into(),
            input: String::new(),
            loading: false,
            error: None,
            share_url: None,
            content: None,
            generation: 0,
        }
    }

    /// Starts loading `input`, discarding any previous result or error.
    pub fn submit(&mut self, input: &str) -> Generation {
        self.generation += 1;
        self.input = input.to_string();
        self.loading = true;
        self.error = None;
        self.share_url = None;
        self.content = None;
        Generation(self.generation)
    }

    /// Applies the outcome of submission `generation`.
    ///
    /// Returns false, leaving the state untouched, when a newer submission
    /// has started since.
    pub fn finish(
        &mut self,
        generation: Generation,
        outcome: Result<Rendered, ViewerError>,
    ) -> bool {
        if generation.0 != self.generation {
            tracing::debug!(
                stale = generation.0,
                current = self.generation,
                "dropping stale completion"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(rendered) => {
                self.share_url = Some(share_url(&self.share_base, &self.input));
                self.content = Some(rendered);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.content = None;
                self.share_url = None;
            }
        }
        true
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn share_url(&self) -> Option<&str> {
        self.share_url.as_deref()
    }

    pub fn content(&self) -> Option<&Rendered> {
        self.content.as_ref()
    }

    /// True before the first submission.
    pub fn is_idle(&self) -> bool {
        !self.loading && self.error.is_none() && self.content.is_none()
    }
}
