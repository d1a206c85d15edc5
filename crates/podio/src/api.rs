//! Item operations as a trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::client::PodioClient;
use crate::item::{FilterOptions, Item, ItemList};
use crate::types::{AppItemId, ItemId};
use crate::Result;

/// The item operations of a Podio app.
///
/// Implemented by [`PodioClient`] and by [`Unconfigured`](crate::Unconfigured),
/// so code can hold either behind `dyn ItemApi`.
#[async_trait]
pub trait ItemApi: Send + Sync {
    /// Create an item from a map of field ids to values.
    async fn add_new_item(&self, fields: &Value) -> Result<Item>;

    /// Fetch an item by its global id.
    async fn get_item(&self, item_id: ItemId) -> Result<Item>;

    /// Fetch an item by its app-local id.
    async fn get_item_by_app_item_id(&self, app_item_id: AppItemId) -> Result<Item>;

    /// Filter the app's items.
    async fn filter_items(&self, options: &FilterOptions) -> Result<ItemList>;

    /// Replace field values on an existing item.
    async fn update_item(&self, item_id: ItemId, fields: &Value) -> Result<Item>;
}

#[async_trait]
impl ItemApi for PodioClient {
    async fn add_new_item(&self, fields: &Value) -> Result<Item> {
        PodioClient::add_new_item(self, fields).await
    }

    async fn get_item(&self, item_id: ItemId) -> Result<Item> {
        PodioClient::get_item(self, item_id).await
    }

    async fn get_item_by_app_item_id(&self, app_item_id: AppItemId) -> Result<Item> {
        PodioClient::get_item_by_app_item_id(self, app_item_id).await
    }

    async fn filter_items(&self, options: &FilterOptions) -> Result<ItemList> {
        PodioClient::filter_items(self, options).await
    }

    async fn update_item(&self, item_id: ItemId, fields: &Value) -> Result<Item> {
        PodioClient::update_item(self, item_id, fields).await
    }
}
