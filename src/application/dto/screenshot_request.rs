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

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::screenshot::ScreenshotRequest;
use crate::utils::errors::ScreenshotError;

/// 截图请求数据传输对象
///
/// 缺失的字段按空字符串处理，由校验统一报告
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotRequestDto {
    /// 设计文件URL
    #[serde(default)]
    #[validate(length(min = 1, message = "figmaFileUrl is required"))]
    pub figma_file_url: String,
    /// 搜索关键字（图层名称或文本内容）
    #[serde(default)]
    #[validate(length(min = 1, message = "keyText is required"))]
    pub key_text: String,
    /// 限定搜索的页面名称
    #[serde(default)]
    pub figma_page_name: Option<String>,
}

impl TryFrom<ScreenshotRequestDto> for ScreenshotRequest {
    type Error = ScreenshotError;

    fn try_from(dto: ScreenshotRequestDto) -> Result<Self, Self::Error> {
        dto.validate()
            .map_err(|_| ScreenshotError::MissingParameters)?;

        Ok(ScreenshotRequest {
            key_text: dto.key_text,
            file_url: dto.figma_file_url,
            page_name: dto.figma_page_name.filter(|name| !name.is_empty()),
        })
    }
}
