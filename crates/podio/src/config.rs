//! Client configuration.

use crate::error::Error;
use crate::types::ApiUrl;

/// Default base URL of the item API.
pub const DEFAULT_API_URL: &str = "https://api.podio.com";

/// Default URL of the OAuth2 token endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://podio.com/oauth/token";

/// Endpoint and transport settings for a [`PodioClient`](crate::PodioClient).
///
/// The defaults point at the public Podio service; overriding the URLs is
/// mostly useful for tests against a mock server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_url: ApiUrl,
    auth_url: ApiUrl,
    user_agent: String,
}

impl ClientConfig {
    /// Configuration for the public Podio endpoints.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            api_url: ApiUrl::new(DEFAULT_API_URL)?,
            auth_url: ApiUrl::new(DEFAULT_AUTH_URL)?,
            user_agent: concat!("podio-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        })
    }

    /// Override the item API base URL.
    pub fn with_api_url(mut self, url: impl AsRef<str>) -> Result<Self, Error> {
        self.api_url = ApiUrl::new(url)?;
        Ok(self)
    }

    /// Override the token endpoint URL.
    pub fn with_auth_url(mut self, url: impl AsRef<str>) -> Result<Self, Error> {
        self.auth_url = ApiUrl::new(url)?;
        Ok(self)
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    pub fn auth_url(&self) -> &ApiUrl {
        &self.auth_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
