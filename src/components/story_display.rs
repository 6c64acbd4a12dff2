//! Display region for generated stories.
//!
//! Renders whatever `StoryPhase` the page is in: a hint before the first
//! submission, the loading placeholder while a request is in flight, the
//! generated text on success, or the server's message as an error block.

#[cfg(test)]
#[path = "story_display_test.rs"]
mod story_display_test;

use leptos::prelude::*;

use crate::state::story::{StoryPhase, StoryState};

/// Placeholder shown while a generation request is in flight.
pub const PLACEHOLDER_TEXT: &str = "Loading...";

/// CSS class for the element a phase renders into.
fn phase_class(phase: &StoryPhase) -> &'static str {
    match phase {
        StoryPhase::Idle => "story-display__hint",
        StoryPhase::Loading | StoryPhase::Ready(_) => "story-display__block",
        StoryPhase::Failed(_) => "story-display__error",
    }
}

/// Text a phase renders.
fn phase_text(phase: &StoryPhase) -> String {
    match phase {
        StoryPhase::Idle => "Enter a prompt to generate a story.".to_owned(),
        StoryPhase::Loading => PLACEHOLDER_TEXT.to_owned(),
        StoryPhase::Ready(text) => text.clone(),
        StoryPhase::Failed(message) => message.clone(),
    }
}

/// Story display region, a pure function of the story phase.
#[component]
pub fn StoryDisplay() -> impl IntoView {
    let story = expect_context::<RwSignal<StoryState>>();

    view! {
        <div class="story-display">
            {move || {
                let phase = story.get().phase;
                view! {
                    <p class=phase_class(&phase)>{phase_text(&phase)}</p>
                }
            }}
        </div>
    }
}
