//! State for the story generation page.
//!
//! DESIGN
//! ======
//! The displayed region is a pure function of `StoryPhase`, which replaces
//! the original page's imperative placeholder-node juggling. Submissions
//! take a token from a generation counter; a response whose token no longer
//! matches is stale and is discarded, so a double-submit cannot let an
//! older response overwrite a newer one.

#[cfg(test)]
#[path = "story_test.rs"]
mod story_test;

/// What the story display region is currently showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StoryPhase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; the placeholder is shown.
    Loading,
    /// The last request succeeded with this generated text.
    Ready(String),
    /// The last request failed with this message.
    Failed(String),
}

/// State for the story page.
#[derive(Clone, Debug, Default)]
pub struct StoryState {
    /// Current display phase.
    pub phase: StoryPhase,
    /// Token of the most recent submission.
    request_seq: u64,
}

impl StoryState {
    /// Start a new request: advance the token and show the placeholder.
    ///
    /// Returns the token the eventual response must present.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.phase = StoryPhase::Loading;
        self.request_seq
    }

    /// Apply a successful response. Stale tokens are discarded.
    ///
    /// Returns whether the response was applied.
    pub fn finish_success(&mut self, token: u64, text: String) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.phase = StoryPhase::Ready(text);
        true
    }

    /// Apply a failed response. Stale tokens are discarded.
    ///
    /// Returns whether the response was applied.
    pub fn finish_error(&mut self, token: u64, message: String) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.phase = StoryPhase::Failed(message);
        true
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == StoryPhase::Loading
    }
}
