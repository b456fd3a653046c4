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

use anyhow::Context;
use figshot::application::usecases::capture_screenshot::CaptureScreenshotUseCase;
use figshot::config::settings::Settings;
use figshot::infrastructure::cloudinary_client::CloudinaryClient;
use figshot::infrastructure::figma_client::FigmaClient;
use figshot::infrastructure::metrics::init_metrics;
use figshot::presentation::routes;
use figshot::utils::telemetry;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting figshot...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new().context("failed to load configuration")?);
    info!("Configuration loaded");

    // 3. Initialize Prometheus Metrics
    init_metrics(&settings.metrics);

    // 4. Initialize external clients
    let figma = Arc::new(FigmaClient::new(&settings.figma)?);
    let cloudinary = Arc::new(CloudinaryClient::new(&settings.cloudinary)?);
    let use_case = Arc::new(CaptureScreenshotUseCase::new(
        figma,
        cloudinary,
        settings.clone(),
    ));

    // 5. Start HTTP server
    let app = routes::routes(use_case);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
