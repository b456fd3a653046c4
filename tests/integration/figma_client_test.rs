// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use figshot::domain::models::design_node::NodeType;
use figshot::domain::repositories::design_repository::{DesignApiError, DesignRepository};
use figshot::infrastructure::figma_client::FigmaClient;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{render_payload, sample_file, test_settings, FIGMA_TOKEN};

async fn client_for(server: &MockServer) -> FigmaClient {
    let settings = test_settings(&server.uri(), "http://127.0.0.1:1");
    FigmaClient::new(&settings.figma).expect("Failed to build Figma client")
}

#[tokio::test]
async fn test_fetch_file_parses_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/files/ABC123"))
        .and(header("X-Figma-Token", FIGMA_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_file()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let file = client.fetch_file("ABC123").await.unwrap();

    assert_eq!(file.name.as_deref(), Some("Test"));
    let pages: Vec<&str> = file.pages().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(pages, vec!["Home", "Checkout"]);
    assert_eq!(file.document.children[0].children[1].node_type, NodeType::Text);
}

/// 测试非2xx状态映射为带状态码的错误
#[tokio::test]
async fn test_fetch_file_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/files/ABC123"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"status": 404, "err": "Not found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.fetch_file("ABC123").await;

    match result {
        Err(DesignApiError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("Not found"));
        }
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_fetch_file_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/files/ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.fetch_file("ABC123").await;

    assert!(matches!(result, Err(DesignApiError::InvalidResponse(_))));
}

/// 测试渲染请求带上节点ID与缩放比例
#[tokio::test]
async fn test_render_node_sends_ids_and_scale() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/images/ABC123"))
        .and(query_param("ids", "1:2"))
        .and(query_param("scale", "2"))
        .and(header("X-Figma-Token", FIGMA_TOKEN))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(render_payload("1:2", Some("https://render.example/1-2.png"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let url = client.render_node("ABC123", "1:2", 2.0).await.unwrap();

    assert_eq!(url.as_deref(), Some("https://render.example/1-2.png"));
}

#[tokio::test]
async fn test_render_node_null_image_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/images/ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(render_payload("1:2", None)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let url = client.render_node("ABC123", "1:2", 2.0).await.unwrap();

    assert!(url.is_none());
}

#[tokio::test]
async fn test_render_node_missing_entry_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/images/ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"err": null, "images": {}})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let url = client.render_node("ABC123", "1:2", 2.0).await.unwrap();

    assert!(url.is_none());
}

/// 测试响应中的 err 字段视为错误
#[tokio::test]
async fn test_render_node_reports_err_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/images/ABC123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"err": "Render timeout", "images": {}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.render_node("ABC123", "1:2", 2.0).await;

    match result {
        Err(DesignApiError::InvalidResponse(message)) => assert_eq!(message, "Render timeout"),
        other => panic!("expected invalid response, got {:?}", other),
    }
}
