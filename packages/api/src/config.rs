//! Backend location, read from the environment.

use reqwest::Url;

use crate::ApiError;

/// Used when `HOTEL_API_URL` is not set: the backend's development server.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Where the hotel backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config for the given base URL. The URL must be http(s) with a
    /// host and no query or fragment; a trailing slash is dropped so paths can
    /// be appended directly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let raw = base_url.into();
        let url = Url::parse(raw.trim())
            .map_err(|err| ApiError::Config(format!("invalid base URL {raw:?}: {err}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!("not an http(s) URL: {url}")));
        }
        if !matches!(url.host_str(), Some(host) if !host.is_empty()) {
            return Err(ApiError::Config(format!("missing host: {url}")));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiError::Config(format!(
                "base URL must not carry a query or fragment: {url}"
            )));
        }

        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Read `HOTEL_API_URL` from the process environment (and `.env`).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();
        match std::env::var("HOTEL_API_URL") {
            Ok(url) => Self::new(url),
            Err(_) => Ok(Self::default()),
        }
    }

    /// The browser has no environment, so the URL is baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ApiError> {
        match option_env!("HOTEL_API_URL") {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    /// Absolute URL for an endpoint path such as `/me`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.hotel.test/").unwrap();
        assert_eq!(config.base_url, "https://api.hotel.test");
        assert_eq!(config.endpoint("/me"), "https://api.hotel.test/me");
        assert_eq!(
            config.endpoint("admin/bookings"),
            "https://api.hotel.test/admin/bookings"
        );
    }

    #[test]
    fn test_rejects_non_http() {
        assert!(matches!(
            ApiConfig::new("ftp://hotel"),
            Err(ApiError::Config(_))
        ));
        assert!(ApiConfig::new("http://").is_err());
        assert!(ApiConfig::new("localhost:5000").is_err());
    }

    #[test]
    fn test_rejects_malformed_hosts() {
        assert!(matches!(
            ApiConfig::new("http://exa mple.com"),
            Err(ApiError::Config(_))
        ));
        assert!(ApiConfig::new("http://:::").is_err());
    }

    #[test]
    fn test_rejects_query_and_fragment() {
        assert!(ApiConfig::new("https://a/b?c#d").is_err());
        assert!(ApiConfig::new("https://a/b?c").is_err());
        assert!(ApiConfig::new("https://a/b#d").is_err());
    }

    #[test]
    fn test_keeps_path_prefix() {
        let config = ApiConfig::new(" http://hotel.test:8000/api/ ").unwrap();
        assert_eq!(config.base_url, "http://hotel.test:8000/api");
        assert_eq!(config.endpoint("/me"), "http://hotel.test:8000/api/me");
    }

    #[test]
    fn test_default_points_at_dev_server() {
        assert_eq!(ApiConfig::default().endpoint("/login"), "http://localhost:5000/login");
    }
}
