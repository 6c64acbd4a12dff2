//! REST API helpers for the generation and comments endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a transport
//! fault or malformed body degrades into an inline error message rather
//! than an uncaught fault.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::GenerateRequest;

#[cfg(feature = "hydrate")]
const GENERATE_ENDPOINT: &str = "/gpt2";

#[cfg(feature = "hydrate")]
const DELETE_COMMENTS_ENDPOINT: &str = "/delete-data";

#[cfg(any(test, feature = "hydrate"))]
fn comments_endpoint(limit: u32) -> String {
    format!("/data?comment-count={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comments_request_failed_message(status: u16) -> String {
    format!("comments request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_request_failed_message(status: u16) -> String {
    format!("delete request failed: {status}")
}

/// Submit a prompt to `POST /gpt2` and return the generated text.
///
/// Reads the HTTP ok flag and the body text, then parses the body: on a
/// success status the payload is the generated text, on a failure status it
/// is the server's error message.
///
/// # Errors
///
/// Returns a display-ready message for a failure status, a transport
/// fault, or a malformed body.
pub async fn generate_story(req: &GenerateRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(GENERATE_ENDPOINT)
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        if ok {
            super::types::parse_generation_payload(&body)
        } else {
            Err(super::types::parse_error_payload(&body, status))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Fetch up to `limit` comments from `GET /data?comment-count=<limit>`.
///
/// # Errors
///
/// Returns a display-ready message for a failure status, a transport
/// fault, or a body that is not a JSON array of strings.
pub async fn fetch_comments(limit: u32) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = comments_endpoint(limit);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(comments_request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        super::types::parse_comments_payload(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err("not available on server".to_owned())
    }
}

/// Ask the server to remove all comments via `POST /delete-data`.
///
/// The response body is ignored; the caller reloads the page afterwards.
///
/// # Errors
///
/// Returns a display-ready message for a failure status or a transport
/// fault.
pub async fn delete_all_comments() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(DELETE_COMMENTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(delete_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
