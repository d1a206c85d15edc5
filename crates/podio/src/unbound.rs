//! A stand-in for a client that was never configured.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::api::ItemApi;
use crate::auth::Credentials;
use crate::client::PodioClient;
use crate::error::Error;
use crate::item::{FilterOptions, Item, ItemList};
use crate::types::{AppItemId, ItemId};
use crate::Result;

/// An item API with no credentials behind it.
///
/// Every operation fails with [`Error::NotConfigured`] without touching the
/// network. Use [`Unconfigured::configure`] to obtain a working client.
///
/// ```
/// use podio::{Error, ItemApi, ItemId, Unconfigured};
///
/// # async fn example() {
/// let err = Unconfigured.get_item(ItemId::new(1)).await.unwrap_err();
/// assert!(matches!(err, Error::NotConfigured));
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl Unconfigured {
    /// Build a real client from credentials.
    pub fn configure(self, credentials: Credentials) -> Result<PodioClient> {
        PodioClient::new(credentials)
    }

    fn refuse<T>(operation: &str) -> Result<T> {
        warn!(operation, "Item operation called on an unconfigured client");
        Err(Error::NotConfigured)
    }
}

#[async_trait]
impl ItemApi for Unconfigured {
    async fn add_new_item(&self, _fields: &Value) -> Result<Item> {
        Self::refuse("add_new_item")
    }

    async fn get_item(&self, _item_id: ItemId) -> Result<Item> {
        Self::refuse("get_item")
    }

    async fn get_item_by_app_item_id(&self, _app_item_id: AppItemId) -> Result<Item> {
        Self::refuse("get_item_by_app_item_id")
    }

    async fn filter_items(&self, _options: &FilterOptions) -> Result<ItemList> {
        Self::refuse("filter_items")
    }

    async fn update_item(&self, _item_id: ItemId, _fields: &Value) -> Result<Item> {
        Self::refuse("update_item")
    }
}
