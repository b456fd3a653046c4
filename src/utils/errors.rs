// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 截图流水线错误类型
///
/// 每个变体对应一种确定的HTTP响应；携带的诊断信息只用于日志，
/// 不会返回给调用方。
#[derive(Error, Debug)]
pub enum ScreenshotError {
    #[error("missing parameters: keyText or figmaFileUrl")]
    MissingParameters,

    #[error("invalid Figma file URL: {0}")]
    InvalidUrl(String),

    #[error("design API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("no node matches key text {key:?}")]
    NodeNotFound { key: String },

    #[error("no rendered image URL for node {node_id}")]
    RenderUnavailable { node_id: String },

    #[error("image host upload failed: {0}")]
    PublishUnavailable(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ScreenshotError {
    /// 指标标签
    pub fn kind(&self) -> &'static str {
        match self {
            ScreenshotError::MissingParameters => "missing_parameters",
            ScreenshotError::InvalidUrl(_) => "invalid_url",
            ScreenshotError::UpstreamUnavailable(_) => "upstream_unavailable",
            ScreenshotError::NodeNotFound { .. } => "node_not_found",
            ScreenshotError::RenderUnavailable { .. } => "render_unavailable",
            ScreenshotError::PublishUnavailable(_) => "publish_unavailable",
            ScreenshotError::Internal(_) => "internal",
        }
    }
}
