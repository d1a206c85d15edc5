//! podio - Client for the Podio items API
//!
//! This library authenticates as a Podio app (OAuth2 `app` grant) and exposes
//! create, read, filter and update operations on that app's items. All
//! operations flow through a [`PodioClient`], which caches the access token
//! and refreshes it when it expires.
//!
//! # Example
//!
//! ```no_run
//! use podio::{Credentials, FilterOptions, ItemId, PodioClient};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), podio::Error> {
//! let credentials = Credentials::builder()
//!     .app_id("123456")
//!     .app_token("app-token")
//!     .client_id("client-id")
//!     .client_secret("client-secret")
//!     .build()?;
//! let client = PodioClient::new(credentials)?;
//!
//! let item = client.get_item(ItemId::new(42)).await?;
//! println!("{}", item.as_value());
//!
//! let updated = client
//!     .update_item(ItemId::new(42), &json!({"title": "Task B"}))
//!     .await?;
//! println!("{:?}", updated.item_id());
//!
//! let list = client.filter_items(&FilterOptions::new().limit(10)).await?;
//! for item in list.items() {
//!     println!("{:?}", item.item_id());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod item;
pub mod types;
pub mod unbound;

mod http;

// Re-export primary types at crate root for convenience
pub use api::ItemApi;
pub use auth::{Credentials, CredentialsBuilder};
pub use client::{PodioClient, TokenStatus};
pub use config::ClientConfig;
pub use error::Error;
pub use item::{FilterOptions, Item, ItemList};
pub use types::{ApiUrl, AppId, AppItemId, ItemId};
pub use unbound::Unconfigured;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
