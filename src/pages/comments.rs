//! Comment board page: fetch, render, and clear-all.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use leptos::prelude::*;

use crate::components::comment_list::CommentList;
use crate::state::comments::{CommentsState, DEFAULT_COMMENTS_LIMIT};

/// Limits offered by the page selector.
const LIMIT_CHOICES: [u32; 4] = [5, 10, 20, 50];

/// Parse the limit selector value, falling back to the default bound.
fn parse_limit_selection(value: &str) -> u32 {
    value.trim().parse().unwrap_or(DEFAULT_COMMENTS_LIMIT)
}

/// Comment board page.
///
/// Fetches once on load, refetches when the limit selector changes, and
/// supports a destructive clear-all that reloads the whole page once the
/// deletion request has completed.
#[component]
pub fn CommentsPage() -> impl IntoView {
    let comments = expect_context::<RwSignal<CommentsState>>();

    let do_refresh = move |limit: u32| {
        comments.update(|s| {
            s.limit = limit;
            s.begin_refresh();
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_comments(limit).await {
                Ok(list) => comments.update(|s| s.apply_comments(list)),
                Err(message) => {
                    leptos::logging::warn!("comments refresh failed: {message}");
                    comments.update(|s| s.apply_error(message));
                }
            }
        });
    };

    // Initial fetch once the page is live in the browser.
    Effect::new(move || {
        do_refresh(comments.get_untracked().limit);
    });

    let on_limit_change = move |ev: leptos::ev::Event| {
        do_refresh(parse_limit_selection(&event_target_value(&ev)));
    };

    let on_clear_all = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Await the deletion before navigating so the reload observes
            // the emptied board.
            if let Err(message) = crate::net::api::delete_all_comments().await {
                leptos::logging::warn!("clear-all failed: {message}");
            }
            crate::util::browser::reload_page();
        });
    };

    view! {
        <div class="comment-board">
            <h1>"Comments"</h1>
            <div class="comment-board__controls">
                <label for="comment-limit">"Show"</label>
                <select
                    id="comment-limit"
                    class="comment-board__limit"
                    prop:value=move || comments.get().limit.to_string()
                    on:change=on_limit_change
                >
                    {LIMIT_CHOICES
                        .iter()
                        .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                        .collect_view()}
                </select>
                <button class="comment-board__refresh" on:click=move |_| do_refresh(comments.get_untracked().limit)>
                    "Refresh"
                </button>
                <button class="comment-board__clear" on:click=on_clear_all>
                    "Delete all comments"
                </button>
            </div>
            <CommentList/>
            <a class="comment-board__link" href="/">"Back to stories"</a>
        </div>
    }
}
