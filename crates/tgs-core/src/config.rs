use std::time::Duration;

use crate::{domain::BotToken, domain::Method, errors::Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Where requests go and how the HTTP client is built.
///
/// Built in code only; tokens are not part of it and are passed per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Client-side timeout. `None` lets a request run until the transport gives up.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ApiConfig {
    /// Point the client at another Bot API server (self-hosted, or a test stub).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(Error::Config(format!(
                "base url must start with http:// or https://, got {base_url:?}"
            )));
        }
        Ok(Self {
            base_url,
            request_timeout: None,
        })
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// `<base>/bot<token>/<method>`
    pub fn method_url(&self, token: &BotToken, method: &Method) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url.trim_end_matches('/'),
            token.expose(),
            method.as_str()
        )
    }
}
