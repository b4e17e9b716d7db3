//! Build-time configuration
//!
//! A static bundle has no environment at runtime, so values are baked in at
//! compile time and fall back to defaults when the variable is unset.

/// Used when `TURF_API_BASE_URL` is not set at build time
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin plus path prefix every API call is relative to
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TURF_API_BASE_URL"))
    }

    fn from_values(api_base_url: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None)
    }
}
