//! Endpoint paths and wire types.

use serde::Serialize;
use serde_json::Value;

use crate::types::{AppId, AppItemId, ItemId};

/// Grant type for app authentication.
pub const GRANT_TYPE_APP: &str = "app";

/// `POST /item/app/{app_id}/`
pub fn create_item(app_id: AppId) -> String {
    format!("/item/app/{}/", app_id)
}

/// `GET|PUT /item/{item_id}`
pub fn item(item_id: ItemId) -> String {
    format!("/item/{}", item_id)
}

/// `GET /app/{app_id}/item/{app_item_id}`
pub fn item_by_app_item_id(app_id: AppId, app_item_id: AppItemId) -> String {
    format!("/app/{}/item/{}", app_id, app_item_id)
}

/// `POST /item/app/{app_id}/filter/`
pub fn filter_items(app_id: AppId) -> String {
    format!("/item/app/{}/filter/", app_id)
}

/// Form body for the token endpoint.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub app_id: AppId,
    pub app_token: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

impl std::fmt::Debug for TokenRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("grant_type", &self.grant_type)
            .field("app_id", &self.app_id)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Response from the token endpoint.
///
/// Only `access_token` decides success. `expires_in` is read leniently and is
/// `None` when absent or not a non-negative number.
#[derive(Debug, Default)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
}

impl TokenResponse {
    /// Read a raw token endpoint body. A body that is not JSON yields no token.
    pub fn parse(raw: &str) -> Self {
        let Ok(body) = serde_json::from_str::<Value>(raw) else {
            return Self::default();
        };

        Self {
            access_token: body
                .get("access_token")
                .and_then(Value::as_str)
                .map(str::to_owned),
            expires_in: body.get("expires_in").and_then(lifetime_secs),
        }
    }
}

/// Accepts integers, floats and numeric strings.
fn lifetime_secs(value: &Value) -> Option<u64> {
    let whole_secs = |f: f64| (f.is_finite() && f >= 0.0).then_some(f as u64);

    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_secs)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_secs))
        }
        _ => None,
    }
}

/// Request body for item create and update.
#[derive(Debug, Serialize)]
pub struct ItemFieldsRequest<'a> {
    pub fields: &'a Value,
}
