// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use anyhow::{bail, Context};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::settings::FigmaSettings;
use crate::domain::models::design_node::DesignFile;
use crate::domain::repositories::design_repository::{DesignApiError, DesignRepository};
use crate::infrastructure::truncate_for_log;

const TOKEN_HEADER: &str = "X-Figma-Token";

/// `GET /v1/images/{key}` 响应
#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    images: HashMap<String, Option<String>>,
}

/// 设计文件API客户端
///
/// 基于reqwest，使用请求头令牌认证
pub struct FigmaClient {
    client: reqwest::Client,
    base_url: Url,
    access_token: String,
}

impl FigmaClient {
    pub fn new(settings: &FigmaSettings) -> anyhow::Result<Self> {
        let base_url = Url::parse(&settings.api_base_url)
            .with_context(|| format!("invalid figma.api_base_url: {}", settings.api_base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("figma.api_base_url cannot be a base URL: {}", base_url);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("figshot/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout())
            .build()
            .context("failed to build Figma HTTP client")?;

        Ok(Self {
            client,
            base_url,
            access_token: settings.access_token.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, DesignApiError> {
        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, &self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DesignApiError::Status {
                status: status.as_u16(),
                body: truncate_for_log(&body),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl DesignRepository for FigmaClient {
    async fn fetch_file(&self, file_key: &str) -> Result<DesignFile, DesignApiError> {
        let url = self.endpoint(&["v1", "files", file_key]);
        debug!("Fetching design file {}", file_key);

        let response = self.get(url).await?;
        let bytes = response.bytes().await?;
        debug!("Design file {} fetched ({} bytes)", file_key, bytes.len());

        serde_json::from_slice::<DesignFile>(&bytes)
            .map_err(|e| DesignApiError::InvalidResponse(e.to_string()))
    }

    async fn render_node(
        &self,
        file_key: &str,
        node_id: &str,
        scale: f32,
    ) -> Result<Option<String>, DesignApiError> {
        let mut url = self.endpoint(&["v1", "images", file_key]);
        url.query_pairs_mut()
            .append_pair("ids", node_id)
            .append_pair("scale", &scale.to_string());

        let response = self.get(url).await?;
        let mut body: ImagesResponse = response
            .json()
            .await
            .map_err(|e| DesignApiError::InvalidResponse(e.to_string()))?;

        if let Some(err) = body.err.filter(|err| !err.is_empty()) {
            warn!("Render request for node {} reported: {}", node_id, err);
            return Err(DesignApiError::InvalidResponse(err));
        }

        Ok(body
            .images
            .remove(node_id)
            .flatten()
            .filter(|url| !url.is_empty()))
    }
}
