//! Service endpoint configuration shared by clients.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::{is_http_url, normalize_text_option};
use crate::{Error, Result};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Where the notes service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServiceConfig {
    pub fn new(api_base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url.as_ref())?,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        })
    }

    #[must_use]
    pub const fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Absolute URL for a service route such as `/notes`.
    #[must_use]
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.api_base_url, route)
    }
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Trim, require an http(s) scheme, and drop trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::InvalidConfiguration(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(base) {
        return Err(Error::InvalidConfiguration(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base.to_string())
}

/// Pick the first configured base URL: explicit, then environment, then profile.
pub fn resolve_api_base_url(
    explicit: Option<String>,
    env: Option<String>,
    profile: Option<String>,
) -> Result<String> {
    let raw = normalize_text_option(explicit)
        .or_else(|| normalize_text_option(env))
        .or_else(|| normalize_text_option(profile))
        .ok_or_else(|| {
            Error::InvalidConfiguration("No notes service URL is configured".to_string())
        })?;
    normalize_base_url(&raw)
}
