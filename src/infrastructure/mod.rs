// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域仓库接口的具体实现以及与外部服务的交互：
/// - 设计文件API客户端（figma_client）
/// - 图床客户端（cloudinary_client）
/// - 指标（metrics）
pub mod cloudinary_client;
pub mod figma_client;
pub mod metrics;

/// 日志中保留的上游响应体最大字符数
const LOG_BODY_MAX_CHARS: usize = 512;

/// 截断上游响应体，只用于日志
pub(crate) fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(LOG_BODY_MAX_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
