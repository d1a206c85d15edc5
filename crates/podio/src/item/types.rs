//! Item payload types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{AppItemId, ItemId};

/// An item as returned by the API.
///
/// The representation is passed through untouched; the accessors only read
/// well-known top-level keys when they happen to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Value);

impl Item {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The global item id, if the representation carries one.
    pub fn item_id(&self) -> Option<ItemId> {
        self.0.get("item_id").and_then(Value::as_u64).map(ItemId::new)
    }

    /// The app-local item id, if the representation carries one.
    pub fn app_item_id(&self) -> Option<AppItemId> {
        self.0
            .get("app_item_id")
            .and_then(Value::as_u64)
            .map(AppItemId::new)
    }

    /// The item's `fields` value, if present.
    pub fn fields(&self) -> Option<&Value> {
        self.0.get("fields")
    }

    /// Get a top-level key from the item.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// The result set of a filter request, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList(Value);

impl ItemList {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The items in this result set. Empty if the response has no `items` array.
    pub fn items(&self) -> Vec<Item> {
        self.0
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().cloned().map(Item::new).collect())
            .unwrap_or_default()
    }

    /// Total number of items in the app, if reported.
    pub fn total(&self) -> Option<u64> {
        self.0.get("total").and_then(Value::as_u64)
    }

    /// Number of items matching the filter, if reported.
    pub fn filtered(&self) -> Option<u64> {
        self.0.get("filtered").and_then(Value::as_u64)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Options for a filter request.
///
/// Sent as the request body exactly as built. The helpers only set common
/// top-level keys; anything else can be supplied through [`FilterOptions::from_value`]
/// or [`FilterOptions::set`].
///
/// # Example
///
/// ```
/// use podio::FilterOptions;
/// use serde_json::json;
///
/// let options = FilterOptions::new()
///     .limit(20)
///     .sort_by("created_on", true)
///     .filter("status", json!(["active"]));
///
/// assert_eq!(options.as_value()["limit"], 20);
/// assert_eq!(options.as_value()["filters"]["status"][0], "active");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterOptions(Value);

impl FilterOptions {
    /// Empty options (`{}`).
    pub fn new() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Use an arbitrary JSON value as the request body.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Maximum number of items to return.
    pub fn limit(self, limit: u32) -> Self {
        self.set("limit", Value::from(limit))
    }

    /// Number of items to skip.
    pub fn offset(self, offset: u32) -> Self {
        self.set("offset", Value::from(offset))
    }

    /// Sort key and direction.
    pub fn sort_by(self, key: &str, descending: bool) -> Self {
        self.set("sort_by", Value::from(key))
            .set("sort_desc", Value::from(descending))
    }

    /// Add one entry to the `filters` object.
    pub fn filter(mut self, key: &str, value: Value) -> Self {
        if let Some(obj) = self.object_mut() {
            let filters = obj
                .entry("filters")
                .or_insert_with(|| Value::Object(Map::new()));
            if !filters.is_object() {
                *filters = Value::Object(Map::new());
            }
            if let Some(filters) = filters.as_object_mut() {
                filters.insert(key.to_string(), value);
            }
        }
        self
    }

    /// Set a top-level key. Ignored if the options are not a JSON object.
    pub fn set(mut self, key: &str, value: Value) -> Self {
        if let Some(obj) = self.object_mut() {
            obj.insert(key.to_string(), value);
        }
        self
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn object_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.0.as_object_mut()
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for FilterOptions {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
