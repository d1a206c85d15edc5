//! HTTP client for the token and item endpoints.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, trace, warn};

use crate::auth::AccessToken;
use crate::config::ClientConfig;
use crate::error::{ApiError, AuthError, Error};

use super::endpoints::{TokenRequest, TokenResponse};

/// A freshly issued token and its lifetime in seconds.
#[derive(Debug)]
pub struct IssuedToken {
    pub access_token: AccessToken,
    pub expires_in: u64,
}

/// HTTP client for Podio requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Exchange app credentials for an access token.
    ///
    /// Any response without an `access_token` is an authentication failure,
    /// whatever its status.
    #[instrument(skip_all, fields(app_id = %request.app_id))]
    pub async fn request_token(&self, request: &TokenRequest<'_>) -> Result<IssuedToken, Error> {
        let url = self.config.auth_url().join("");
        debug!(%url, "Requesting access token");

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let raw = response.text().await?;
        trace!(status, "Token response");

        let parsed = TokenResponse::parse(&raw);

        let Some(access_token) = parsed.access_token else {
            return Err(AuthError {
                status_code: status,
                response_raw: raw,
            }
            .into());
        };

        let expires_in = parsed.expires_in.unwrap_or_else(|| {
            warn!("Token response has no usable expires_in; token will be refreshed on next use");
            0
        });

        Ok(IssuedToken {
            access_token: AccessToken::new(access_token),
            expires_in,
        })
    }

    /// Authenticated GET.
    pub async fn get(&self, path: &str, token: &AccessToken) -> Result<Value, Error> {
        self.send::<()>(Method::GET, path, token, None).await
    }

    /// Authenticated POST with a JSON body.
    pub async fn post_json<B>(&self, path: &str, body: &B, token: &AccessToken) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, token, Some(body)).await
    }

    /// Authenticated PUT with a JSON body.
    pub async fn put_json<B>(&self, path: &str, body: &B, token: &AccessToken) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, token, Some(body)).await
    }

    #[instrument(skip(self, token, body), fields(api = %self.config.api_url()))]
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        token: &AccessToken,
        body: Option<&B>,
    ) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.api_url().join(path);
        debug!(%method, %url, "Item request");

        let mut request = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, token.authorization())
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Only 200 counts as success; the body is decoded as JSON.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, Error> {
        let status = response.status();
        let raw = response.text().await?;
        trace!(status = %status, "Item response");

        if status != StatusCode::OK {
            return Err(ApiError {
                status_code: status.as_u16(),
                response_raw: raw,
            }
            .into());
        }

        serde_json::from_str(&raw).map_err(|e| Error::InvalidResponse {
            status_code: status.as_u16(),
            response_raw: raw.clone(),
            reason: e.to_string(),
        })
    }
}
