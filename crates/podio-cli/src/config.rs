//! Connection settings shared by every command.

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use podio::auth::{ENV_APP_ID, ENV_APP_TOKEN, ENV_CLIENT_ID, ENV_CLIENT_SECRET};
use podio::config::{DEFAULT_API_URL, DEFAULT_AUTH_URL};
use podio::{ClientConfig, Credentials, PodioClient};

#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Podio app id
    #[arg(long, env = ENV_APP_ID, global = true)]
    pub app_id: Option<String>,

    /// Podio app token
    #[arg(long, env = ENV_APP_TOKEN, global = true, hide_env_values = true)]
    pub app_token: Option<String>,

    /// API client id
    #[arg(long, env = ENV_CLIENT_ID, global = true)]
    pub client_id: Option<String>,

    /// API client secret
    #[arg(long, env = ENV_CLIENT_SECRET, global = true, hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Item API base URL
    #[arg(long, env = "PODIO_API_URL", global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// OAuth2 token endpoint URL
    #[arg(long, env = "PODIO_AUTH_URL", global = true, default_value = DEFAULT_AUTH_URL)]
    pub auth_url: String,
}

impl ConnectionArgs {
    /// Validate the settings and build a client.
    pub fn client(&self) -> Result<PodioClient> {
        let mut builder = Credentials::builder();
        if let Some(v) = &self.app_id {
            builder = builder.app_id(v);
        }
        if let Some(v) = &self.app_token {
            builder = builder.app_token(v);
        }
        if let Some(v) = &self.client_id {
            builder = builder.client_id(v);
        }
        if let Some(v) = &self.client_secret {
            builder = builder.client_secret(v);
        }
        let credentials = builder
            .build()
            .context("Incomplete credentials (pass --app-id, --app-token, --client-id and --client-secret, or set PODIO_* variables)")?;

        let config = ClientConfig::new()?
            .with_api_url(&self.api_url)
            .context("Invalid --api-url")?
            .with_auth_url(&self.auth_url)
            .context("Invalid --auth-url")?;

        debug!(
            app_id = %credentials.app_id(),
            api_url = %config.api_url(),
            auth_url = %config.auth_url(),
            "Client configured"
        );

        Ok(PodioClient::with_config(credentials, config)?)
    }
}
