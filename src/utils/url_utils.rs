// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

// `/file/<key>` (legacy links) and `/design/<key>` (current links) are equivalent.
static FILE_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(?:file|design)/([^/]+)").expect("file key pattern is a valid regex")
});

/// 从设计文件URL中提取文件ID
///
/// 文件ID是 `/file/` 或 `/design/` 之后、下一个 `/` 之前的路径段，
/// 不限定字符集。两种标记都不存在时返回 `None`。
pub fn extract_file_key(file_url: &str) -> Option<&str> {
    FILE_KEY_PATTERN
        .captures(file_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|key| !key.is_empty())
}
