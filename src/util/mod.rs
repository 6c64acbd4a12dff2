//! Small browser-facing utilities shared by pages.

pub mod browser;
