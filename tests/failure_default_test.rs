// Every operation must fold transport and decode failures into its
// documented default instead of surfacing an error. An httpmock server with
// no mounted mocks answers 404 to everything.

use dumpert_mcp::{DumpertClient, Endpoints, RateDirection};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_list_operations_default_to_empty_on_http_failure() {
    let server = MockServer::start();
    let client = DumpertClient::new(Endpoints::rooted_at(&server.base_url()));

    assert!(client.top_of_day().await.is_empty());
    assert!(client.top_of_week("202503").await.is_empty());
    assert!(client.top_of_month("202506").await.is_empty());
    assert!(client.latest(0).await.is_empty());
    assert!(client.classics(0).await.is_empty());
    assert!(client.related("100124857_51862663").await.is_empty());
    assert!(client.dumpert_tv().await.is_empty());
    assert!(client.hotshiz().await.is_empty());
    assert!(client.search("kat", 0).await.is_empty());
    assert!(client.soundboard().await.is_empty());
}

#[tokio::test]
async fn test_single_entity_operations_default_to_absent_on_http_failure() {
    let server = MockServer::start();
    let client = DumpertClient::new(Endpoints::rooted_at(&server.base_url()));

    assert!(client.info("100124857_51862663").await.is_none());
    assert!(client.comment_by_id("253085847").await.is_none());
    assert!(client
        .comments_for_article("100130000_237d8919")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_videomixer_failure_marker() {
    let server = MockServer::start();
    let client = DumpertClient::new(Endpoints::rooted_at(&server.base_url()));

    let value = client.videomixer().await;
    assert_eq!(value["success"], json!(false));
    assert_eq!(value["response"], json!("Failed to fetch videomixer assets."));
}

#[tokio::test]
async fn test_rate_reports_failure_with_upstream_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rating/100124857_51862663/up");
        then.status(403).body("auth required");
    });

    let client = DumpertClient::new(Endpoints::rooted_at(&server.base_url()));
    let outcome = client.rate("100124857_51862663", RateDirection::Up).await;

    api_mock.assert();
    assert!(!outcome.success);
    assert_eq!(outcome.response, "auth required");
}

#[tokio::test]
async fn test_rate_defaults_on_transport_failure() {
    // Nothing listens on this port; the connection itself fails.
    let client = DumpertClient::new(Endpoints::rooted_at("http://127.0.0.1:9"));
    let outcome = client.rate("100124857_51862663", RateDirection::Down).await;

    assert!(!outcome.success);
    assert_eq!(outcome.response, "");
}

#[tokio::test]
async fn test_decode_failure_defaults_like_http_failure() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/top5/dag/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"items": "not-a-list"}));
    });

    let client = DumpertClient::new(Endpoints::rooted_at(&server.base_url()));
    let items = client.top_of_day().await;

    api_mock.assert();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_non_json_body_defaults_to_absent() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/info/100124857_51862663");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = DumpertClient::new(Endpoints::rooted_at(&server.base_url()));
    let item = client.info("100124857_51862663").await;

    api_mock.assert();
    assert!(item.is_none());
}
