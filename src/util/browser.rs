//! Thin wrappers over `window()` for the few imperative browser actions the
//! pages need. Requires a browser environment; SSR builds get no-ops.

/// Show a blocking alert dialog.
///
/// Used for prompt validation, matching the original page's behavior of
/// stopping the user before any network activity.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Trigger a full page reload (full navigation, not a partial refresh).
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
