mod common;

use common::{AUTH_HEADER, client, relay_address_json};
use ffrelay_client::{CreateRelayAddressRequest, Error, UpdateRelayAddressRequest};
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::json;

const PATH: &str = "/api/v1/relayaddresses/";

#[tokio::test]
async fn list_relay_addresses() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(PATH).header("authorization", AUTH_HEADER);
            then.status(200)
                .body(format!("[{}]", relay_address_json(12345, true, "Shopping")));
        })
        .await;

    let addresses = client(&server).list_relay_addresses().await.unwrap();

    mock.assert_async().await;
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].id, 12345);
    assert_eq!(addresses[0].full_address, "abc123@relay.firefox.com");
    assert!(addresses[0].enabled);
}

#[tokio::test]
async fn list_empty_and_unauthorized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).body("[]");
        })
        .await;
    assert!(client(&server).list_relay_addresses().await.unwrap().is_empty());

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(401)
                .body(r#"{"detail": "Authentication credentials were not provided."}"#);
        })
        .await;
    let err = client(&server).list_relay_addresses().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn list_invalid_json() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).body("{invalid json");
        })
        .await;

    let err = client(&server).list_relay_addresses().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn get_relay_address_uses_item_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/relayaddresses/12345/");
            then.status(200)
                .body(relay_address_json(12345, true, "Test address"));
        })
        .await;

    let address = client(&server).get_relay_address(12345).await.unwrap();

    mock.assert_async().await;
    assert_eq!(address.id, 12345);
    assert_eq!(address.full_address, "abc123@relay.firefox.com");
    assert!(address.enabled);
    assert_eq!(address.last_used_at, None);
}

#[tokio::test]
async fn get_missing_relay_address() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/relayaddresses/99999/");
            then.status(404).body(r#"{"detail": "Not found."}"#);
        })
        .await;

    let err = client(&server).get_relay_address(99999).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.body(), Some(r#"{"detail": "Not found."}"#));
}

#[tokio::test]
async fn create_relay_address_posts_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PATH)
                .header("authorization", AUTH_HEADER)
                .header("content-type", "application/json")
                .json_body(json!({
                    "enabled": true,
                    "description": "New mask",
                    "generated_for": "example.com",
                    "block_list_emails": false
                }));
            then.status(201)
                .body(relay_address_json(99999, true, "New mask"));
        })
        .await;

    let request = CreateRelayAddressRequest::new()
        .description("New mask")
        .generated_for("example.com");
    let address = client(&server).create_relay_address(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(address.id, 99999);
    assert_eq!(address.description, "New mask");
}

#[tokio::test]
async fn create_at_mask_limit() {
    let server = MockServer::start_async().await;
    let body = r#"{"detail": "You have reached the maximum number of email masks."}"#;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(403).body(body);
        })
        .await;

    let err = client(&server)
        .create_relay_address(&CreateRelayAddressRequest::new())
        .await
        .unwrap_err();

    match err {
        Error::Api { status, body: text } => {
            assert_eq!(status, 403);
            assert_eq!(text, body);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_sends_only_supplied_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/v1/relayaddresses/12345/")
                .json_body(json!({
                    "enabled": false,
                    "description": "Updated description"
                }));
            then.status(200)
                .body(relay_address_json(12345, false, "Updated description"));
        })
        .await;

    let request = UpdateRelayAddressRequest::new()
        .enabled(false)
        .description("Updated description");
    let address = client(&server)
        .update_relay_address(12345, &request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!address.enabled);
    assert_eq!(address.description, "Updated description");
    assert_eq!(address.generated_for, "example.com");
    assert_eq!(address.num_forwarded, 10);
}

#[tokio::test]
async fn update_missing_relay_address() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PATCH).path("/api/v1/relayaddresses/99999/");
            then.status(404).body(r#"{"detail": "Not found."}"#);
        })
        .await;

    let request = UpdateRelayAddressRequest::new().enabled(false);
    let err = client(&server)
        .update_relay_address(99999, &request)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_relay_address_accepts_no_content() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v1/relayaddresses/12345/");
            then.status(204);
        })
        .await;

    client(&server).delete_relay_address(12345).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_missing_touches_nothing_else() {
    let server = MockServer::start_async().await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v1/relayaddresses/99999/");
            then.status(404).body(r#"{"detail": "Not found."}"#);
        })
        .await;
    let other = server
        .mock_async(|when, then| {
            when.path("/api/v1/relayaddresses/12345/");
            then.status(500);
        })
        .await;

    let err = client(&server).delete_relay_address(99999).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    delete.assert_hits_async(1).await;
    other.assert_hits_async(0).await;
}

#[tokio::test]
async fn transport_failure_is_a_request_error() {
    // Nothing listens on port 9 on the loopback interface.
    let client = ffrelay_client::Client::builder()
        .token("t")
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = client.list_relay_addresses().await.unwrap_err();
    assert!(matches!(err, Error::Request(_)), "{err:?}");
}
