// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    application::{
        dto::{
            screenshot_request::ScreenshotRequestDto, screenshot_response::ScreenshotResponseDto,
        },
        usecases::capture_screenshot::CaptureScreenshotUseCase,
    },
    domain::{
        models::screenshot::ScreenshotRequest,
        repositories::{
            design_repository::DesignRepository, image_host_repository::ImageHostRepository,
        },
    },
    infrastructure::metrics::record_screenshot,
    presentation::errors::AppError,
    utils::errors::ScreenshotError,
};

/// 处理截图请求
///
/// # 参数
///
/// * `use_case` - 截图用例实例
/// * `payload` - JSON请求体；解析失败按缺少参数处理
///
/// # 返回值
///
/// 成功时返回 `{"imageUrl": ...}`，失败时返回 [`AppError`] 对应的响应
pub async fn capture_screenshot<D, H>(
    Extension(use_case): Extension<Arc<CaptureScreenshotUseCase<D, H>>>,
    payload: Result<Json<ScreenshotRequestDto>, JsonRejection>,
) -> Result<Json<ScreenshotResponseDto>, AppError>
where
    D: DesignRepository + 'static,
    H: ImageHostRepository + 'static,
{
    let request_id = Uuid::new_v4();
    let span = info_span!("screenshot", %request_id);
    let started = Instant::now();

    let result = async {
        let Json(dto) = payload.map_err(|rejection| {
            warn!("Unreadable request body: {}", rejection.body_text());
            ScreenshotError::MissingParameters
        })?;

        info!(
            key_text = %dto.key_text,
            figma_file_url = %dto.figma_file_url,
            figma_page_name = ?dto.figma_page_name,
            "Screenshot requested"
        );

        let request = ScreenshotRequest::try_from(dto)?;
        use_case.execute(request).await
    }
    .instrument(span.clone())
    .await;

    span.in_scope(|| match result {
        Ok(published) => {
            record_screenshot("success", started.elapsed());
            info!("Screenshot served in {:?}", started.elapsed());
            Ok(Json(ScreenshotResponseDto {
                image_url: published.url,
            }))
        }
        Err(e) => {
            record_screenshot(e.kind(), started.elapsed());
            Err(AppError(e))
        }
    })
}

/// 非POST请求
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(json!({ "error": "Method Not Allowed" })),
    )
}
