// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::config::settings::Settings;
use crate::domain::models::screenshot::{build_public_id, PublishedImage, ScreenshotRequest};
use crate::domain::repositories::design_repository::DesignRepository;
use crate::domain::repositories::image_host_repository::ImageHostRepository;
use crate::domain::services::node_locator::{find_node, SearchScope};
use crate::utils::errors::ScreenshotError;
use crate::utils::url_utils::extract_file_key;

/// 渲染倍率，固定为2x
pub const RENDER_SCALE: f32 = 2.0;

// === Section: Use Case Definition ===

/// 截图用例
///
/// 解析文件ID → 获取文档树 → 查找节点 → 渲染 → 上传图床。
/// 各阶段顺序执行，任一阶段失败立即结束，不做重试。
pub struct CaptureScreenshotUseCase<D, H>
where
    D: DesignRepository,
    H: ImageHostRepository,
{
    design_repo: Arc<D>,
    image_host: Arc<H>,
    settings: Arc<Settings>,
}

// === Section: Implementation ===

impl<D, H> CaptureScreenshotUseCase<D, H>
where
    D: DesignRepository,
    H: ImageHostRepository,
{
    pub fn new(design_repo: Arc<D>, image_host: Arc<H>, settings: Arc<Settings>) -> Self {
        Self {
            design_repo,
            image_host,
            settings,
        }
    }

    pub async fn execute(
        &self,
        request: ScreenshotRequest,
    ) -> Result<PublishedImage, ScreenshotError> {
        let file_key = extract_file_key(&request.file_url)
            .ok_or_else(|| ScreenshotError::InvalidUrl(request.file_url.clone()))?;
        debug!("Resolved file key {}", file_key);

        let node_id = self.locate_node(file_key, &request).await?;
        let render_url = self.render(file_key, &node_id).await?;

        let public_id = build_public_id(&request.key_text, Utc::now());
        let folder = &self.settings.cloudinary.folder;
        let published = self
            .image_host
            .upload_from_url(&render_url, folder, &public_id)
            .await
            .map_err(|e| {
                error!("Upload of {}/{} failed: {}", folder, public_id, e);
                ScreenshotError::PublishUnavailable(e.to_string())
            })?;

        info!(
            "Screenshot for node {} published as {} at {}",
            node_id, published.public_id, published.url
        );
        Ok(published)
    }

    async fn locate_node(
        &self,
        file_key: &str,
        request: &ScreenshotRequest,
    ) -> Result<String, ScreenshotError> {
        let file = self.design_repo.fetch_file(file_key).await.map_err(|e| {
            error!("Fetching design file {} failed: {}", file_key, e);
            ScreenshotError::UpstreamUnavailable(e.to_string())
        })?;

        let scope = SearchScope::resolve(&file, request.page_name.as_deref());
        debug!(
            "Searching {} top-level nodes of {} for \"{}\"",
            scope.nodes.len(),
            scope.page.map_or("the whole file", |page| page),
            request.key_text
        );

        match find_node(&scope, &request.key_text) {
            Some(node) => {
                info!("Matched node {} (\"{}\")", node.id, node.name);
                Ok(node.id.clone())
            }
            None => {
                if scope.is_restricted() {
                    warn!(
                        "No node matches \"{}\" on page \"{}\" of file {}",
                        request.key_text,
                        scope.page.unwrap_or_default(),
                        file_key
                    );
                } else {
                    warn!(
                        "No node matches \"{}\" in file {}",
                        request.key_text, file_key
                    );
                }
                Err(ScreenshotError::NodeNotFound {
                    key: request.key_text.clone(),
                })
            }
        }
    }

    async fn render(&self, file_key: &str, node_id: &str) -> Result<String, ScreenshotError> {
        let scale = RENDER_SCALE;
        let render_url = self
            .design_repo
            .render_node(file_key, node_id, scale)
            .await
            .map_err(|e| {
                error!("Render request for node {} failed: {}", node_id, e);
                ScreenshotError::UpstreamUnavailable(e.to_string())
            })?;

        match render_url {
            Some(url) => {
                debug!("Rendered node {} at {}x", node_id, scale);
                Ok(url)
            }
            None => {
                error!("No rendered image URL returned for node {}", node_id);
                Err(ScreenshotError::RenderUnavailable {
                    node_id: node_id.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "capture_screenshot_test.rs"]
mod tests;
