// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// 设计节点类型
///
/// 只区分搜索需要的类型，其余类型统一解码为 `Unknown`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    /// 页面（画布）
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Vector,
    BooleanOperation,
    Rectangle,
    Ellipse,
    Line,
    Star,
    RegularPolygon,
    Slice,
    /// 文本图层
    Text,
    #[serde(other)]
    Unknown,
}

/// 设计文档树中的节点
#[derive(Debug, Clone, Deserialize)]
pub struct DesignNode {
    /// 节点ID，在文件内唯一
    pub id: String,
    /// 图层名称，可能为空
    #[serde(default)]
    pub name: String,
    /// 节点类型
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// 文本内容，仅文本节点携带
    #[serde(default)]
    pub characters: Option<String>,
    /// 子节点，叶子节点上不存在
    #[serde(default)]
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    pub fn is_page(&self) -> bool {
        self.node_type == NodeType::Canvas
    }

    /// 名称匹配：名称非空且包含关键字（区分大小写的子串匹配）
    pub fn name_contains(&self, key_text: &str) -> bool {
        !self.name.is_empty() && self.name.contains(key_text)
    }

    /// 内容匹配：文本节点且文本内容非空并包含关键字
    pub fn text_contains(&self, key_text: &str) -> bool {
        self.node_type == NodeType::Text
            && self
                .characters
                .as_deref()
                .is_some_and(|chars| !chars.is_empty() && chars.contains(key_text))
    }
}

/// 设计文件
///
/// 设计文件API `GET /v1/files/{key}` 的响应，只保留文档树
#[derive(Debug, Clone, Deserialize)]
pub struct DesignFile {
    #[serde(default)]
    pub name: Option<String>,
    pub document: DesignNode,
}

impl DesignFile {
    /// 顶层页面列表
    pub fn pages(&self) -> &[DesignNode] {
        &self.document.children
    }
}
