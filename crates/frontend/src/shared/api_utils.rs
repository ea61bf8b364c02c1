//! API URL construction for frontend-backend communication

/// Base URL of the bookings REST API
///
/// Derived from the current window location so the same bundle works on
/// localhost and in production behind the same host.
///
/// # Returns
/// - Origin like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    location.origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/bookings/client");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
