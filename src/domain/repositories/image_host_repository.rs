// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::screenshot::PublishedImage;

/// 图床错误类型
#[derive(Error, Debug)]
pub enum ImageHostError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Image host returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 图床仓库特质
#[async_trait]
pub trait ImageHostRepository: Send + Sync {
    /// 让图床从远程URL拉取图片，保存到 `folder/public_id` 下
    async fn upload_from_url(
        &self,
        source_url: &str,
        folder: &str,
        public_id: &str,
    ) -> Result<PublishedImage, ImageHostError>;
}
