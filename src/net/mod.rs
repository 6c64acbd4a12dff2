//! Networking modules for the portfolio REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls to `/gpt2`, `/data`, and `/delete-data`;
//! `types` defines the wire schema and payload parsing shared with tests.

pub mod api;
pub mod types;
