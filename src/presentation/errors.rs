// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::utils::errors::ScreenshotError;

/// 应用错误类型
///
/// 把流水线错误转换为固定的HTTP状态码和响应体。
/// 诊断信息只写入日志，不出现在响应体中。
#[derive(Debug)]
pub struct AppError(pub ScreenshotError);

impl AppError {
    /// 状态码与响应体
    pub fn status_and_body(&self) -> (StatusCode, serde_json::Value) {
        match &self.0 {
            ScreenshotError::MissingParameters => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing parameters: keyText or figmaFileUrl." }),
            ),
            ScreenshotError::InvalidUrl(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid Figma file URL." }),
            ),
            ScreenshotError::NodeNotFound { key } => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Figma node not found for the specified text.", "key": key }),
            ),
            ScreenshotError::RenderUnavailable { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Could not get Figma rendered image URL for the node." }),
            ),
            // Upstream and upload failures share the generic body; the variant only shows in logs and metrics
            ScreenshotError::UpstreamUnavailable(_)
            | ScreenshotError::PublishUnavailable(_)
            | ScreenshotError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error while processing screenshot." }),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            error!("Screenshot request failed ({}): {:#}", status, self.0);
        } else {
            warn!("Screenshot request rejected ({}): {}", status, self.0);
        }

        (status, Json(body)).into_response()
    }
}

impl From<ScreenshotError> for AppError {
    fn from(err: ScreenshotError) -> Self {
        Self(err)
    }
}
