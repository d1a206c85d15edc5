//! Validated identifier and URL types.

mod api_url;
mod ids;

pub use api_url::ApiUrl;
pub use ids::{AppId, AppItemId, ItemId};
