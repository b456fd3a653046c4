// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};

/// 公开ID中关键字部分的最大长度（UTF-16码元）
pub const PUBLIC_ID_KEY_MAX_LEN: usize = 50;

/// 截图请求
///
/// 由入站请求构造，每次流水线执行消费一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotRequest {
    /// 搜索关键字
    pub key_text: String,
    /// 设计文件URL
    pub file_url: String,
    /// 可选的页面名称，限定搜索范围
    pub page_name: Option<String>,
}

/// 已发布的截图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedImage {
    /// 图床返回的公开ID（含目录前缀）
    pub public_id: String,
    /// 可长期访问的公开URL
    pub url: String,
}

/// 生成图床公开ID
///
/// 按UTF-16码元处理关键字：`[A-Za-z0-9]` 之外的码元替换为 `_`，
/// 截断到50个码元，再追加毫秒时间戳，保证同一关键字的重复上传不会冲突。
/// 基本平面之外的字符（如emoji）占两个码元，因此变成 `__`。
pub fn build_public_id(key_text: &str, now: DateTime<Utc>) -> String {
    let slug: String = key_text
        .encode_utf16()
        .map(|unit| match char::from_u32(u32::from(unit)) {
            Some(c) if c.is_ascii_alphanumeric() => c,
            _ => '_',
        })
        .take(PUBLIC_ID_KEY_MAX_LEN)
        .collect();

    format!("{}_{}", slug, now.timestamp_millis())
}
