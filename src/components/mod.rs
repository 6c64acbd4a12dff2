//! Rendering components shared by the route-level pages.

pub mod comment_list;
pub mod story_display;
