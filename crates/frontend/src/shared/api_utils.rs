//! API utilities for frontend-backend communication
//!
//! Resolves the REST base URL and holds request-level settings.

use std::time::Duration;

/// Backend requests are aborted after this long
pub const API_TIMEOUT: Duration = Duration::from_millis(5000);

/// Port the backend listens on when no explicit URL was compiled in
pub const DEFAULT_API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Uses `KAMUSEWA_API_URL` when it was set at compile time, otherwise builds
/// `{protocol}//{hostname}:3000/api` from the current window location.
///
/// # Example
/// ```ignore
/// let url = join_url(&api_base(), "/items/42"); // "http://localhost:3000/api/items/42"
/// ```
pub fn api_base() -> String {
    if let Some(url) = option_env!("KAMUSEWA_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://localhost:{}/api", DEFAULT_API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}/api", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from an endpoint path such as `/items/42`
pub fn api_url(endpoint: &str) -> String {
    join_url(&api_base(), endpoint)
}

/// Joins base and endpoint with exactly one slash between them
pub fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    if endpoint.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, endpoint)
    }
}

/// Auth endpoints are the only ones callable without a stored token
pub fn is_public_endpoint(endpoint: &str) -> bool {
    endpoint.trim_start_matches('/').starts_with("auth/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000/api", "/items"),
            "http://localhost:3000/api/items"
        );
        assert_eq!(
            join_url("http://localhost:3000/api/", "rentals/7/status"),
            "http://localhost:3000/api/rentals/7/status"
        );
        assert_eq!(join_url("http://x/api", ""), "http://x/api");
    }

    #[test]
    fn test_public_endpoints() {
        assert!(is_public_endpoint("/auth/login"));
        assert!(is_public_endpoint("auth/register"));
        assert!(!is_public_endpoint("/items"));
        assert!(!is_public_endpoint("/authors"));
    }
}
