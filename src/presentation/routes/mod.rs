// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

use crate::application::usecases::capture_screenshot::CaptureScreenshotUseCase;
use crate::domain::repositories::design_repository::DesignRepository;
use crate::domain::repositories::image_host_repository::ImageHostRepository;
use crate::presentation::handlers::screenshot_handler;

/// 截图端点路径
pub const SCREENSHOT_PATH: &str = "/api/screenshot";

/// 创建应用路由
///
/// # 参数
///
/// * `use_case` - 截图用例，所有请求共享
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<D, H>(use_case: Arc<CaptureScreenshotUseCase<D, H>>) -> Router
where
    D: DesignRepository + 'static,
    H: ImageHostRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route(
            SCREENSHOT_PATH,
            post(screenshot_handler::capture_screenshot::<D, H>)
                .fallback(screenshot_handler::method_not_allowed),
        )
        .layer(Extension(use_case))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
