//! Backend location for the REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is served as static files, so the API base URL is resolved at
//! startup from the host page first (`<meta name="taskboard-api-base">`), then
//! from the `TASKBOARD_API_BASE_URL` value baked in at compile time, then the
//! same-origin default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Name of the `<meta>` tag that overrides the base URL at runtime.
pub const API_BASE_META_NAME: &str = "taskboard-api-base";

const COMPILED_API_BASE_URL: Option<&str> = option_env!("TASKBOARD_API_BASE_URL");

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    EmptyBaseUrl,
}

/// REST endpoint configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Normalize `raw` into a config. Surrounding whitespace and trailing
    /// slashes are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] when nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let base_url = raw.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self { base_url: base_url.to_owned() })
    }

    /// Resolve from the host page, the compile-time value, then the default.
    pub fn resolve() -> Self {
        Self::from_sources(meta_base_url().as_deref(), COMPILED_API_BASE_URL)
    }

    fn from_sources(meta: Option<&str>, compiled: Option<&str>) -> Self {
        for (source, raw) in [("meta tag", meta), ("compile-time env", compiled)] {
            let Some(raw) = raw else {
                continue;
            };
            match Self::new(raw) {
                Ok(config) => {
                    log::debug!("api base url from {source}: {}", config.base_url);
                    return config;
                }
                Err(e) => log::warn!("ignoring api base url from {source}: {e}"),
            }
        }
        Self::default()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

fn meta_base_url() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
        let meta = document.query_selector(&selector).ok().flatten()?;
        meta.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
