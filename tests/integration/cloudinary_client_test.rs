// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use figshot::domain::repositories::image_host_repository::{ImageHostError, ImageHostRepository};
use figshot::infrastructure::cloudinary_client::CloudinaryClient;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{test_settings, upload_payload, CLOUDINARY_API_KEY};

async fn client_for(server: &MockServer) -> CloudinaryClient {
    let settings = test_settings("http://127.0.0.1:1", &server.uri());
    CloudinaryClient::new(&settings.cloudinary).expect("Failed to build Cloudinary client")
}

/// 测试签名上传表单字段完整
#[tokio::test]
async fn test_upload_posts_signed_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1_1/demo/image/upload"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("folder=figma-screenshots"))
        .and(body_string_contains("public_id=Submit_1719307544000"))
        .and(body_string_contains("timestamp="))
        .and(body_string_contains("file=https%3A%2F%2Frender.example%2F1-2.png"))
        .and(body_string_contains(format!("api_key={}", CLOUDINARY_API_KEY)))
        .and(body_string_contains("signature="))
        .and(body_string_contains("signature_algorithm=sha256"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(upload_payload("figma-screenshots/Submit_1719307544000")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let published = client
        .upload_from_url(
            "https://render.example/1-2.png",
            "figma-screenshots",
            "Submit_1719307544000",
        )
        .await
        .unwrap();

    assert_eq!(published.public_id, "figma-screenshots/Submit_1719307544000");
    assert_eq!(
        published.url,
        "https://res.cloudinary.com/demo/image/upload/v1719307544/figma-screenshots/Submit_1719307544000.png"
    );
}

#[tokio::test]
async fn test_upload_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1_1/demo/image/upload"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": {"message": "Invalid Signature"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client
        .upload_from_url("https://render.example/1-2.png", "figma-screenshots", "Submit_1")
        .await;

    match result {
        Err(ImageHostError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid Signature"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_rejects_response_without_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1_1/demo/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"public_id": "x"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client
        .upload_from_url("https://render.example/1-2.png", "figma-screenshots", "x")
        .await;

    assert!(matches!(result, Err(ImageHostError::InvalidResponse(_))));
}
