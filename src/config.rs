//! Build-time client configuration.
//!
//! The backend base URL is baked into the WASM bundle. Set
//! `BRANDCRAFT_API_BASE` when building to point the client at a different
//! deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when no override is supplied at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Connection settings for the backend REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix joined with every endpoint path, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Build a config for an explicit base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Read `BRANDCRAFT_API_BASE` from the build environment, falling back to
    /// [`DEFAULT_API_BASE`] when unset or blank.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("BRANDCRAFT_API_BASE"))
    }

    fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(base) if !base.is_empty() => Self::new(base),
            _ => Self::default(),
        }
    }

    /// Join the base URL with `endpoint` verbatim.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}
