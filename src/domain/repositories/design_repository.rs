// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::design_node::DesignFile;

/// 设计文件API错误类型
#[derive(Error, Debug)]
pub enum DesignApiError {
    /// 网络错误或超时
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Design API returned {status}: {body}")]
    Status { status: u16, body: String },
    /// 响应无法解析
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 设计文件仓库特质
///
/// 定义对设计文件API的读取与渲染接口
#[async_trait]
pub trait DesignRepository: Send + Sync {
    /// 获取文件的完整文档树
    async fn fetch_file(&self, file_key: &str) -> Result<DesignFile, DesignApiError>;

    /// 请求渲染单个节点，返回临时图片URL；API未给出URL时返回 `None`
    async fn render_node(
        &self,
        file_key: &str,
        node_id: &str,
        scale: f32,
    ) -> Result<Option<String>, DesignApiError>;
}
