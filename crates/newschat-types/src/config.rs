use serde::{Deserialize, Serialize};

use crate::{ChatError, Result};

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Where and how to reach the news assistant backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme + host (+ port) of the backend, e.g. `https://news.example.com`
    pub api_origin: String,
    pub timeout_ms: u64,
    /// Send cookies / HTTP auth with requests
    pub include_credentials: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_origin: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            include_credentials: false,
        }
    }
}

impl ClientConfig {
    pub fn new(api_origin: impl Into<String>) -> Self {
        Self {
            api_origin: api_origin.into(),
            ..Self::default()
        }
    }

    fn origin(&self) -> &str {
        self.api_origin.trim().trim_end_matches('/')
    }

    /// Base for all chat endpoints: `{origin}/api`
    pub fn api_base(&self) -> String {
        format!("{}/api", self.origin())
    }

    /// Diagnostic endpoint outside the `/api` prefix
    pub fn health_url(&self) -> String {
        format!("{}/health", self.origin())
    }

    pub fn validate(&self) -> Result<()> {
        let origin = self.origin();
        if origin.is_empty() {
            return Err(ChatError::Config("API origin is not set".to_string()));
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ChatError::Config(format!(
                "API origin must be an http(s) URL, got {:?}",
                origin
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ChatError::Config("timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}
