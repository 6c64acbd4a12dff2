//! State for the comment board page.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

/// How many comments a refresh requests when the user has not chosen.
pub const DEFAULT_COMMENTS_LIMIT: u32 = 20;

/// State for the comment board.
///
/// The client holds a read-only copy of the server's list; every refresh is
/// a full replace, never an incremental merge.
#[derive(Clone, Debug)]
pub struct CommentsState {
    /// Comments in server-provided order.
    pub comments: Vec<String>,
    /// Bound on how many comments to request.
    pub limit: u32,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Message from the last failed fetch, if any.
    pub error: Option<String>,
}

impl Default for CommentsState {
    fn default() -> Self {
        Self {
            comments: Vec::new(),
            limit: DEFAULT_COMMENTS_LIMIT,
            loading: false,
            error: None,
        }
    }
}

impl CommentsState {
    /// Mark a refresh as started.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Replace the displayed list with a freshly fetched one.
    pub fn apply_comments(&mut self, comments: Vec<String>) {
        self.comments = comments;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. The previously displayed list is kept.
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
