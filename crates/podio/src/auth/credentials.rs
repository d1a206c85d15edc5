//! App-level OAuth2 credentials.

use std::fmt;

use crate::error::{ConfigError, Error};
use crate::types::AppId;

/// Environment variable holding the app id.
pub const ENV_APP_ID: &str = "PODIO_APP_ID";
/// Environment variable holding the app token.
pub const ENV_APP_TOKEN: &str = "PODIO_APP_TOKEN";
/// Environment variable holding the API client id.
pub const ENV_CLIENT_ID: &str = "PODIO_CLIENT_ID";
/// Environment variable holding the API client secret.
pub const ENV_CLIENT_SECRET: &str = "PODIO_CLIENT_SECRET";

/// Credentials for the Podio app authentication flow.
///
/// All four fields are required. They are validated once at construction and
/// are immutable afterwards.
///
/// # Security
///
/// The app token and client secret are never exposed in Debug output.
///
/// # Example
///
/// ```
/// use podio::Credentials;
///
/// let creds = Credentials::builder()
///     .app_id("123")
///     .app_token("app-token")
///     .client_id("my-client")
///     .client_secret("my-secret")
///     .build()
///     .unwrap();
/// assert_eq!(creds.app_id().get(), 123);
/// ```
#[derive(Clone)]
pub struct Credentials {
    app_id: AppId,
    app_token: String,
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create credentials from all four values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if any value is empty, or
    /// [`ConfigError::InvalidField`] if `app_id` is not numeric.
    pub fn new(
        app_id: impl Into<String>,
        app_token: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::builder()
            .app_id(app_id)
            .app_token(app_token)
            .client_id(client_id)
            .client_secret(client_secret)
            .build()
    }

    /// Start building credentials field by field.
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::default()
    }

    /// Read credentials from the `PODIO_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials by `PODIO_*` variable name from any source.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut builder = Self::builder();
        if let Some(v) = lookup(ENV_APP_ID) {
            builder = builder.app_id(v);
        }
        if let Some(v) = lookup(ENV_APP_TOKEN) {
            builder = builder.app_token(v);
        }
        if let Some(v) = lookup(ENV_CLIENT_ID) {
            builder = builder.client_id(v);
        }
        if let Some(v) = lookup(ENV_CLIENT_SECRET) {
            builder = builder.client_secret(v);
        }
        builder.build()
    }

    /// Returns the app id.
    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    /// Returns the API client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn app_token(&self) -> &str {
        &self.app_token
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_token", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Builder for [`Credentials`].
///
/// Missing or empty fields are reported by [`build`](Self::build), in the
/// order `app_id`, `app_token`, `client_id`, `client_secret`.
#[derive(Default, Clone)]
pub struct CredentialsBuilder {
    app_id: Option<String>,
    app_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl CredentialsBuilder {
    pub fn app_id(mut self, value: impl Into<String>) -> Self {
        self.app_id = Some(value.into());
        self
    }

    pub fn app_token(mut self, value: impl Into<String>) -> Self {
        self.app_token = Some(value.into());
        self
    }

    pub fn client_id(mut self, value: impl Into<String>) -> Self {
        self.client_id = Some(value.into());
        self
    }

    pub fn client_secret(mut self, value: impl Into<String>) -> Self {
        self.client_secret = Some(value.into());
        self
    }

    /// Validate and produce the credentials.
    pub fn build(self) -> Result<Credentials, Error> {
        let app_id = required("app_id", self.app_id)?;
        let app_token = required("app_token", self.app_token)?;
        let client_id = required("client_id", self.client_id)?;
        let client_secret = required("client_secret", self.client_secret)?;

        Ok(Credentials {
            app_id: AppId::parse(&app_id)?,
            app_token,
            client_id,
            client_secret,
        })
    }
}

impl fmt::Debug for CredentialsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsBuilder")
            .field("app_id", &self.app_id)
            .field("app_token", &self.app_token.as_ref().map(|_| "[REDACTED]"))
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField { field }),
    }
}
