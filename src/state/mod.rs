//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`story`, `comments`) so each screen depends on a
//! small focused model. The models are plain data with pure transition
//! methods; pages wrap them in `RwSignal`s provided via context.

pub mod comments;
pub mod story;
