//! Comment list rendered from the board state.

use leptos::prelude::*;

use crate::state::comments::CommentsState;

/// List of comments in server order. Every refresh re-renders the whole
/// list; there is no incremental diffing to reconcile.
#[component]
pub fn CommentList() -> impl IntoView {
    let comments = expect_context::<RwSignal<CommentsState>>();

    view! {
        <div class="comment-board__list">
            {move || {
                let state = comments.get();
                if let Some(message) = state.error {
                    return view! {
                        <p class="comment-board__error">{message}</p>
                    }
                    .into_any();
                }
                if state.comments.is_empty() {
                    let text = if state.loading { "Loading comments..." } else { "No comments yet." };
                    return view! {
                        <p class="comment-board__empty">{text}</p>
                    }
                    .into_any();
                }
                view! {
                    <ul class="comment-board__items">
                        {state
                            .comments
                            .into_iter()
                            .map(|comment| view! { <li class="comment-board__item">{comment}</li> })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}
