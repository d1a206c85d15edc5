//! Mock Podio tests for the podio library.
//!
//! These tests use wiremock to simulate the token and item endpoints and test
//! the client's behavior without requiring network access or real credentials.

use podio::{AppItemId, ClientConfig, Credentials, Error, FilterOptions, ItemId, PodioClient};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/oauth/token";

/// Helper to create a client pointed at a mock server.
fn mock_client(server: &MockServer) -> PodioClient {
    let base = format!("http://127.0.0.1:{}", server.address().port());
    let config = ClientConfig::new()
        .unwrap()
        .with_api_url(&base)
        .unwrap()
        .with_auth_url(format!("{}{}", base, TOKEN_PATH))
        .unwrap();
    let credentials = Credentials::new("1234", "app-token", "client-id", "client-secret").unwrap();
    PodioClient::with_config(credentials, config).unwrap()
}

/// Mount a token endpoint that issues `token` valid for `expires_in` seconds.
async fn mount_token(server: &MockServer, token: &str, expires_in: u64, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "bearer",
            "expires_in": expires_in,
            "refresh_token": "unused",
            "ref": {"type": "app", "id": 1234}
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_first_call_authenticates_with_app_grant() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=app"))
        .and(body_string_contains("app_id=1234"))
        .and(body_string_contains("app_token=app-token"))
        .and(body_string_contains("client_id=client-id"))
        .and(body_string_contains("client_secret=client-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "expires_in": 28800
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/item/42"))
        .and(header("authorization", "OAuth2 access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let item = client.get_item(ItemId::new(42)).await.unwrap();

    assert_eq!(item.item_id(), Some(ItemId::new(42)));
}

#[tokio::test]
async fn test_cached_token_skips_authentication() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/item/42"))
        .and(header("authorization", "OAuth2 access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 42})))
        .expect(3)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    for _ in 0..3 {
        client.get_item(ItemId::new(42)).await.unwrap();
    }

    let status = client.token_status().await.unwrap();
    assert_eq!(status.expires_in, 3600);
    assert!(!status.is_expired());
}

#[tokio::test]
async fn test_expired_token_is_refreshed_before_call() {
    let server = MockServer::start().await;

    // First token expires immediately, second one lasts
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "old-token",
            "expires_in": 0
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_token(&server, "new-token", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/item/42"))
        .and(header("authorization", "OAuth2 old-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 42})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/42"))
        .and(header("authorization", "OAuth2 new-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client.get_item(ItemId::new(42)).await.unwrap();
    assert!(client.token_status().await.unwrap().is_expired());

    client.get_item(ItemId::new(42)).await.unwrap();
    assert_eq!(client.token_status().await.unwrap().expires_in, 3600);
}

#[tokio::test]
async fn test_missing_access_token_short_circuits() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"error":"unauthorized","error_description":"Invalid app token"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/item/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 42})))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.get_item(ItemId::new(42)).await.unwrap_err();

    assert!(matches!(err, Error::Auth(_)));
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(
        err.response_raw(),
        Some(r#"{"error":"unauthorized","error_description":"Invalid app token"}"#)
    );
    assert!(client.token_status().await.is_none());
}

#[tokio::test]
async fn test_ok_token_response_without_token_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"expires_in": 3600})))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .add_new_item(&json!({"title": "Task A"}))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Auth(_)));
    assert_eq!(err.status_code(), Some(200));
    assert_eq!(err.response_raw(), Some(r#"{"expires_in":3600}"#));
}

#[tokio::test]
async fn test_token_with_string_or_float_lifetime_is_accepted() {
    for (lifetime, expected) in [(json!("3600"), 3600), (json!(3600.0), 3600)] {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "lenient-token",
                "expires_in": lifetime
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/item/42"))
            .and(header("authorization", "OAuth2 lenient-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 42})))
            .expect(2)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        client.get_item(ItemId::new(42)).await.unwrap();
        client.get_item(ItemId::new(42)).await.unwrap();

        let status = client.token_status().await.unwrap();
        assert_eq!(status.expires_in, expected);
    }
}

#[tokio::test]
async fn test_token_with_negative_lifetime_is_used_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "short-lived",
            "expires_in": -1
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/item/42"))
        .and(header("authorization", "OAuth2 short-lived"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 42})))
        .expect(2)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client.get_item(ItemId::new(42)).await.unwrap();
    client.get_item(ItemId::new(42)).await.unwrap();

    assert_eq!(client.token_status().await.unwrap().expires_in, 0);
}

#[tokio::test]
async fn test_auth_url_trailing_slash_is_preserved() {
    let server = MockServer::start().await;
    let base = format!("http://127.0.0.1:{}", server.address().port());

    Mock::given(method("POST"))
        .and(path("/oauth/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "slash-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new()
        .unwrap()
        .with_api_url(&base)
        .unwrap()
        .with_auth_url(format!("{}/oauth/token/", base))
        .unwrap();
    let credentials = Credentials::new("1234", "app-token", "client-id", "client-secret").unwrap();
    let client = PodioClient::with_config(credentials, config).unwrap();

    let status = client.authenticate().await.unwrap();
    assert_eq!(status.expires_in, 3600);
}

#[tokio::test]
async fn test_non_json_token_response_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("Service Unavailable")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .filter_items(&FilterOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.response_raw(), Some("Service Unavailable"));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_refresh() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/item/7"))
        .and(header("authorization", "OAuth2 access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": 7})))
        .expect(8)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let calls = (0..8).map(|_| {
        let client = client.clone();
        async move { client.get_item(ItemId::new(7)).await }
    });
    let results = futures_util::future::join_all(calls).await;

    assert!(results.iter().all(Result::is_ok));
}

#[tokio::test]
async fn test_authenticate_forces_new_token() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 2).await;

    let client = mock_client(&server);
    let first = client.authenticate().await.unwrap();
    let second = client.authenticate().await.unwrap();

    assert_eq!(first.expires_in, 3600);
    assert_eq!(second.expires_in, 3600);
}

// ============================================================================
// Item Operation Tests
// ============================================================================

#[tokio::test]
async fn test_add_new_item_success() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    Mock::given(method("POST"))
        .and(path("/item/app/1234/"))
        .and(header("authorization", "OAuth2 access-1"))
        .and(body_json(json!({"fields": {"title": "Task A"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "item_id": 42,
            "fields": {"title": "Task A"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let item = client
        .add_new_item(&json!({"title": "Task A"}))
        .await
        .unwrap();

    assert_eq!(
        item.as_value(),
        &json!({"item_id": 42, "fields": {"title": "Task A"}})
    );
}

#[tokio::test]
async fn test_add_new_item_created_status_is_error() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    Mock::given(method("POST"))
        .and(path("/item/app/1234/"))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"item_id":42}"#))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .add_new_item(&json!({"title": "Task A"}))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.status_code(), Some(201));
    assert_eq!(err.response_raw(), Some(r#"{"item_id":42}"#));
}

#[tokio::test]
async fn test_get_item_not_found() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    let body = r#"{"error":"not_found","error_description":"Object not found"}"#;
    Mock::given(method("GET"))
        .and(path("/item/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string(body))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.get_item(ItemId::new(42)).await.unwrap_err();

    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.response_raw(), Some(body));
}

#[tokio::test]
async fn test_get_item_by_app_item_id() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/app/1234/item/3"))
        .and(header("authorization", "OAuth2 access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "item_id": 42,
            "app_item_id": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let item = client
        .get_item_by_app_item_id(AppItemId::new(3))
        .await
        .unwrap();

    assert_eq!(item.item_id(), Some(ItemId::new(42)));
    assert_eq!(item.app_item_id(), Some(AppItemId::new(3)));
}

#[tokio::test]
async fn test_filter_items_passes_options_through() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    let options = json!({
        "limit": 2,
        "filters": {"status": ["active"]},
        "custom": {"left": "alone"}
    });

    Mock::given(method("POST"))
        .and(path("/item/app/1234/filter/"))
        .and(header("authorization", "OAuth2 access-1"))
        .and(body_json(options.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 10,
            "filtered": 2,
            "items": [{"item_id": 1}, {"item_id": 2}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let list = client
        .filter_items(&FilterOptions::from_value(options))
        .await
        .unwrap();

    assert_eq!(list.filtered(), Some(2));
    assert_eq!(list.items().len(), 2);
}

#[tokio::test]
async fn test_update_item_sends_fields_envelope() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    Mock::given(method("PUT"))
        .and(path("/item/42"))
        .and(header("authorization", "OAuth2 access-1"))
        .and(body_json(json!({"fields": {"title": "Task B"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"revision": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client
        .update_item(ItemId::new(42), &json!({"title": "Task B"}))
        .await
        .unwrap();

    assert_eq!(result.get("revision"), Some(&json!(2)));
}

#[tokio::test]
async fn test_update_item_no_content_is_error() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    Mock::given(method("PUT"))
        .and(path("/item/42"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .update_item(ItemId::new(42), &json!({"title": "Task B"}))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(204));
    assert_eq!(err.response_raw(), Some(""));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_non_json_success_body() {
    let server = MockServer::start().await;
    mount_token(&server, "access-1", 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/item/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.get_item(ItemId::new(42)).await.unwrap_err();

    assert!(matches!(err, Error::InvalidResponse { .. }));
    assert_eq!(err.status_code(), Some(200));
    assert_eq!(err.response_raw(), Some("<html>oops</html>"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a port, then release it so nothing is listening there
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let base = format!("http://127.0.0.1:{}", port);
    let config = ClientConfig::new()
        .unwrap()
        .with_api_url(&base)
        .unwrap()
        .with_auth_url(format!("{}{}", base, TOKEN_PATH))
        .unwrap();
    let credentials = Credentials::new("1234", "app-token", "client-id", "client-secret").unwrap();
    let client = PodioClient::with_config(credentials, config).unwrap();

    let err = client.get_item(ItemId::new(42)).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status_code(), None);
}
