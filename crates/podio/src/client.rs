//! The Podio items client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

use crate::auth::{AccessToken, AuthSession, Credentials};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::http::endpoints::{self, GRANT_TYPE_APP, ItemFieldsRequest, TokenRequest};
use crate::http::HttpClient;
use crate::item::{FilterOptions, Item, ItemList};
use crate::types::{AppId, AppItemId, ItemId};

/// A client for the items of one Podio app.
///
/// Every operation first makes sure a valid access token is cached,
/// authenticating with the app credentials when there is none or it has
/// expired, and then issues exactly one item request.
///
/// # Thread Safety
///
/// Clients are cheap to clone (they use internal `Arc`) and are safe to share
/// across tasks. Clones share the cached token. Token refresh is
/// single-flight: concurrent operations that find the token missing or
/// expired wait for one token request and all use its result.
///
/// # Example
///
/// ```no_run
/// use podio::{Credentials, PodioClient};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), podio::Error> {
/// let credentials = Credentials::new("123", "app-token", "client-id", "client-secret")?;
/// let client = PodioClient::new(credentials)?;
///
/// let item = client.add_new_item(&json!({"title": "Task A"})).await?;
/// println!("created {:?}", item.item_id());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PodioClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    credentials: Credentials,
    http: HttpClient,
    session: Mutex<Option<AuthSession>>,
}

/// Snapshot of the cached token's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStatus {
    /// Lifetime granted by the token endpoint, in seconds.
    pub expires_in: u64,
    /// Time left before the token must be refreshed.
    pub remaining: Duration,
}

impl TokenStatus {
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }
}

impl PodioClient {
    /// Create a client for the public Podio endpoints.
    ///
    /// No network activity happens until the first operation.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_config(credentials, ClientConfig::new()?)
    }

    /// Create a client with custom endpoint configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, Error> {
        let http = HttpClient::new(config)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                credentials,
                http,
                session: Mutex::new(None),
            }),
        })
    }

    /// Create a client from the `PODIO_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(Credentials::from_env()?)
    }

    /// Returns the app this client operates on.
    pub fn app_id(&self) -> AppId {
        self.inner.credentials.app_id()
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.http.config()
    }

    /// Discard any cached token and authenticate again.
    #[instrument(skip(self), fields(app_id = %self.app_id()))]
    pub async fn authenticate(&self) -> Result<TokenStatus, Error> {
        let mut session = self.inner.session.lock().await;
        let fresh = self.request_session().await?;
        let status = status_of(&fresh);
        *session = Some(fresh);
        Ok(status)
    }

    /// Lifetime of the cached token, or `None` if the client never authenticated.
    pub async fn token_status(&self) -> Option<TokenStatus> {
        self.inner.session.lock().await.as_ref().map(status_of)
    }

    /// Return a usable access token, authenticating first if needed.
    ///
    /// The session lock is held across the check and the token request so
    /// that only one refresh is in flight per client.
    async fn ensure_authenticated(&self) -> Result<AccessToken, Error> {
        let mut session = self.inner.session.lock().await;

        if let Some(current) = session.as_ref().filter(|s| !s.is_expired()) {
            debug!("Using cached access token");
            return Ok(current.access_token().clone());
        }

        let fresh = self.request_session().await?;
        let token = fresh.access_token().clone();
        *session = Some(fresh);
        Ok(token)
    }

    async fn request_session(&self) -> Result<AuthSession, Error> {
        info!("Authenticating app");

        let credentials = &self.inner.credentials;
        let request = TokenRequest {
            grant_type: GRANT_TYPE_APP,
            app_id: credentials.app_id(),
            app_token: credentials.app_token(),
            client_id: credentials.client_id(),
            client_secret: credentials.client_secret(),
        };

        let issued = self.inner.http.request_token(&request).await?;
        debug!(expires_in = issued.expires_in, "Authenticated");

        Ok(AuthSession::new(
            issued.access_token,
            issued.expires_in,
            Instant::now(),
        ))
    }

    // ========================================================================
    // Item Operations
    // ========================================================================

    /// Create an item in the app from a map of field ids to values.
    #[instrument(skip(self, item_fields), fields(app_id = %self.app_id()))]
    pub async fn add_new_item(&self, item_fields: &Value) -> Result<Item, Error> {
        let token = self.ensure_authenticated().await?;
        debug!("Creating item");

        let path = endpoints::create_item(self.app_id());
        let body = ItemFieldsRequest {
            fields: item_fields,
        };
        let value = self.inner.http.post_json(&path, &body, &token).await?;
        Ok(Item::new(value))
    }

    /// Fetch an item by its global id.
    #[instrument(skip(self), fields(app_id = %self.app_id()))]
    pub async fn get_item(&self, item_id: ItemId) -> Result<Item, Error> {
        let token = self.ensure_authenticated().await?;
        debug!("Getting item");

        let path = endpoints::item(item_id);
        let value = self.inner.http.get(&path, &token).await?;
        Ok(Item::new(value))
    }

    /// Fetch an item by its app-local id.
    #[instrument(skip(self), fields(app_id = %self.app_id()))]
    pub async fn get_item_by_app_item_id(&self, app_item_id: AppItemId) -> Result<Item, Error> {
        let token = self.ensure_authenticated().await?;
        debug!("Getting item by app item id");

        let path = endpoints::item_by_app_item_id(self.app_id(), app_item_id);
        let value = self.inner.http.get(&path, &token).await?;
        Ok(Item::new(value))
    }

    /// Filter the app's items. The options are sent unmodified.
    #[instrument(skip(self, options), fields(app_id = %self.app_id()))]
    pub async fn filter_items(&self, options: &FilterOptions) -> Result<ItemList, Error> {
        let token = self.ensure_authenticated().await?;
        debug!("Filtering items");

        let path = endpoints::filter_items(self.app_id());
        let value = self.inner.http.post_json(&path, options, &token).await?;
        Ok(ItemList::new(value))
    }

    /// Replace field values on an existing item.
    #[instrument(skip(self, item_fields), fields(app_id = %self.app_id()))]
    pub async fn update_item(&self, item_id: ItemId, item_fields: &Value) -> Result<Item, Error> {
        let token = self.ensure_authenticated().await?;
        debug!("Updating item");

        let path = endpoints::item(item_id);
        let body = ItemFieldsRequest {
            fields: item_fields,
        };
        let value = self.inner.http.put_json(&path, &body, &token).await?;
        Ok(Item::new(value))
    }
}

fn status_of(session: &AuthSession) -> TokenStatus {
    TokenStatus {
        expires_in: session.expires_in(),
        remaining: session.remaining_at(Instant::now()),
    }
}

impl std::fmt::Debug for PodioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PodioClient")
            .field("app_id", &self.app_id())
            .field("api_url", self.config().api_url())
            .field("credentials", &self.inner.credentials)
            .field("session", &"[REDACTED]")
            .finish()
    }
}
