//! Story generation page: prompt form plus the display region.

#[cfg(test)]
#[path = "story_test.rs"]
mod story_test;

use leptos::prelude::*;

use crate::components::story_display::StoryDisplay;
use crate::net::types::GenerateRequest;
use crate::state::story::{StoryPhase, StoryState};

/// Validate and normalize the prompt input.
///
/// # Errors
///
/// Returns the alert message when the prompt is empty or whitespace.
fn validate_prompt(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("You need to enter a value");
    }
    Ok(trimmed.to_owned())
}

/// Parse the optional max-length field. Blank or unusable input means
/// "let the server pick".
fn parse_length_input(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok().filter(|n| (1..=1024).contains(n))
}

/// Parse the optional temperature field. Blank or unusable input means
/// "let the server pick".
fn parse_temperature_input(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t > 0.0 && *t <= 1.0)
}

/// Story page: prompt input, optional generation parameters, and the
/// display region.
///
/// Submissions are not serialized: a second submit while one is in flight
/// simply takes a newer token, and the stale-response guard in
/// [`StoryState`] decides which response gets rendered.
#[component]
pub fn StoryPage() -> impl IntoView {
    let story = expect_context::<RwSignal<StoryState>>();

    let prompt = RwSignal::new(String::new());
    let length = RwSignal::new(String::new());
    let temperature = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let prompt_value = match validate_prompt(&prompt.get()) {
            Ok(value) => value,
            Err(message) => {
                // Blocking alert, before any network activity.
                crate::util::browser::alert(message);
                return;
            }
        };

        let request = GenerateRequest {
            text: prompt_value,
            length: parse_length_input(&length.get()),
            temperature: parse_temperature_input(&temperature.get()),
        };
        let token = story.try_update(StoryState::begin_request).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_story(&request).await {
                Ok(text) => {
                    story.update(|s| {
                        let _ = s.finish_success(token, text);
                    });
                }
                Err(message) => {
                    leptos::logging::warn!("generation request failed: {message}");
                    story.update(|s| {
                        let _ = s.finish_error(token, message);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, token);
        }
    };

    view! {
        <div class="story-page">
            <h1>"Backstory"</h1>
            <form class="story-form" on:submit=on_submit>
                <input
                    class="story-form__prompt"
                    type="text"
                    placeholder="Once upon a time..."
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                />
                <input
                    class="story-form__length"
                    type="number"
                    min="1"
                    max="1024"
                    placeholder="256"
                    prop:value=move || length.get()
                    on:input=move |ev| length.set(event_target_value(&ev))
                />
                <input
                    class="story-form__temperature"
                    type="text"
                    placeholder="0.7"
                    prop:value=move || temperature.get()
                    on:input=move |ev| temperature.set(event_target_value(&ev))
                />
                <button class="story-form__submit" type="submit">
                    {move || {
                        if story.get().phase == StoryPhase::Loading { "Generating..." } else { "Generate" }
                    }}
                </button>
            </form>
            <StoryDisplay/>
            <a class="story-page__link" href="/comments">"Comment board"</a>
        </div>
    }
}
