//! API utilities for frontend-backend communication
//!
//! Resolves the base URL of the dashboard API that serves the lookup lists.

/// Port of the backend server next to the dashboard host
pub const BACKEND_PORT: u16 = 3000;

/// Where list requests are sent.
///
/// Normally built from the current window location; an explicit base is used
/// by tests and by deployments behind a reverse proxy (empty base = same origin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_window()
    }
}

impl ApiConfig {
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL like "http://localhost:3000" derived from the window location,
    /// or same-origin (empty base) if the window is not available.
    pub fn from_window() -> Self {
        Self::with_base(api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Build a full API URL from a path (should start with "/api/")
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }
}

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if !cfg!(target_arch = "wasm32") {
        return String::new();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let api = ApiConfig::with_base("http://localhost:3000/");
        assert_eq!(api.base(), "http://localhost:3000");
        assert_eq!(api.url("/api/roles"), "http://localhost:3000/api/roles");
        assert_eq!(api.url("api/roles"), "http://localhost:3000/api/roles");
    }

    #[test]
    fn test_same_origin_base() {
        let api = ApiConfig::with_base("");
        assert_eq!(api.url("/api/roles"), "/api/roles");
    }

    #[test]
    fn test_native_build_has_no_window() {
        assert_eq!(api_base(), "");
    }
}
