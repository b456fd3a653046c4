// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{bail, Context};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;
use url::Url;

use crate::config::settings::CloudinarySettings;
use crate::domain::models::screenshot::PublishedImage;
use crate::domain::repositories::image_host_repository::{ImageHostError, ImageHostRepository};
use crate::infrastructure::truncate_for_log;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

/// 图床上传签名
///
/// 参数按名称排序后以 `key=value` 用 `&` 连接，末尾拼接密钥，
/// 取SHA-256的十六进制摘要。`file`、`api_key`、`signature_algorithm` 等不参与签名的参数不应传入。
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Cloudinary 图床客户端
///
/// 使用签名的 upload 接口，让图床直接从渲染URL拉取图片
pub struct CloudinaryClient {
    client: reqwest::Client,
    upload_url: Url,
    api_key: String,
    api_secret: String,
}

impl CloudinaryClient {
    pub fn new(settings: &CloudinarySettings) -> anyhow::Result<Self> {
        let mut upload_url = Url::parse(&settings.api_base_url).with_context(|| {
            format!(
                "invalid cloudinary.api_base_url: {}",
                settings.api_base_url
            )
        })?;

        match upload_url.path_segments_mut() {
            Ok(mut path) => {
                path.pop_if_empty()
                    .extend(["v1_1", settings.cloud_name.as_str(), "image", "upload"]);
            }
            Err(()) => bail!(
                "cloudinary.api_base_url cannot be a base URL: {}",
                settings.api_base_url
            ),
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("figshot/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout())
            .build()
            .context("failed to build Cloudinary HTTP client")?;

        Ok(Self {
            client,
            upload_url,
            api_key: settings.api_key.clone(),
            api_secret: settings.api_secret.clone(),
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }
}

#[async_trait]
impl ImageHostRepository for CloudinaryClient {
    async fn upload_from_url(
        &self,
        source_url: &str,
        folder: &str,
        public_id: &str,
    ) -> Result<PublishedImage, ImageHostError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signed = [
            ("folder", folder),
            ("public_id", public_id),
            ("timestamp", timestamp.as_str()),
        ];
        let signature = sign_params(&signed, &self.api_secret);

        let mut form: Vec<(&str, &str)> = signed.to_vec();
        form.push(("file", source_url));
        form.push(("api_key", self.api_key.as_str()));
        form.push(("signature", signature.as_str()));
        form.push(("signature_algorithm", "sha256"));

        debug!("Uploading {}/{} to image host", folder, public_id);
        let response = self
            .client
            .post(self.upload_url.clone())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageHostError::Status {
                status: status.as_u16(),
                body: truncate_for_log(&body),
            });
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageHostError::InvalidResponse(e.to_string()))?;

        Ok(PublishedImage {
            public_id: body.public_id,
            url: body.secure_url,
        })
    }
}
