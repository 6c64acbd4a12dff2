use super::*;

#[test]
fn loading_phase_renders_placeholder_text() {
    assert_eq!(phase_text(&StoryPhase::Loading), "Loading...");
    assert_eq!(phase_class(&StoryPhase::Loading), "story-display__block");
}

#[test]
fn ready_phase_renders_generated_text_in_block() {
    let phase = StoryPhase::Ready("hello".to_owned());
    assert_eq!(phase_text(&phase), "hello");
    assert_eq!(phase_class(&phase), "story-display__block");
}

#[test]
fn failed_phase_renders_message_as_error() {
    let phase = StoryPhase::Failed("bad request".to_owned());
    assert_eq!(phase_text(&phase), "bad request");
    assert_eq!(phase_class(&phase), "story-display__error");
}

#[test]
fn idle_phase_renders_hint() {
    assert_eq!(phase_class(&StoryPhase::Idle), "story-display__hint");
}
