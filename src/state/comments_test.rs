use super::*;

#[test]
fn comments_state_default_uses_limit_twenty() {
    let state = CommentsState::default();
    assert!(state.comments.is_empty());
    assert_eq!(state.limit, 20);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_comments_is_a_full_replace() {
    let mut state = CommentsState::default();
    state.apply_comments(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
    assert_eq!(state.comments, ["a", "b", "c"]);

    // Refreshing against unchanged server state renders the same list,
    // no duplication.
    state.apply_comments(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
    assert_eq!(state.comments, ["a", "b", "c"]);
}

#[test]
fn apply_comments_clears_loading_and_error() {
    let mut state = CommentsState::default();
    state.begin_refresh();
    state.error = Some("comments request failed: 500".to_owned());
    state.apply_comments(Vec::new());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_error_keeps_previous_list() {
    let mut state = CommentsState::default();
    state.apply_comments(vec!["kept".to_owned()]);
    state.begin_refresh();
    state.apply_error("comments request failed: 500".to_owned());
    assert_eq!(state.comments, ["kept"]);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("comments request failed: 500"));
}
