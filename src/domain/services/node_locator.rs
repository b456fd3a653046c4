// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::{debug, warn};

use crate::domain::models::design_node::{DesignFile, DesignNode};

/// 搜索范围
///
/// 节点定位器要遍历的有序节点序列
#[derive(Debug, Clone, Copy)]
pub struct SearchScope<'a> {
    /// 范围内的顶层节点
    pub nodes: &'a [DesignNode],
    /// 限定到的页面名称；为 `None` 表示整个文件
    pub page: Option<&'a str>,
}

impl<'a> SearchScope<'a> {
    /// 整个文件的搜索范围（全部顶层页面）
    pub fn whole_file(file: &'a DesignFile) -> Self {
        Self {
            nodes: file.pages(),
            page: None,
        }
    }

    /// 解析搜索范围
    ///
    /// 指定页面名称时，范围限定为名称完全相等的顶层页面的子节点；
    /// 找不到该页面时回退到整个文件。
    pub fn resolve(file: &'a DesignFile, page_name: Option<&str>) -> Self {
        let Some(page_name) = page_name else {
            return Self::whole_file(file);
        };

        match file
            .pages()
            .iter()
            .find(|page| page.is_page() && page.name == page_name)
        {
            Some(page) => {
                debug!("Search scope limited to page \"{}\"", page.name);
                Self {
                    nodes: &page.children,
                    page: Some(page.name.as_str()),
                }
            }
            None => {
                warn!(
                    "Page \"{}\" not found, searching the whole file",
                    page_name
                );
                Self::whole_file(file)
            }
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.page.is_some()
    }
}

/// 在搜索范围内查找第一个匹配关键字的节点
///
/// 深度优先、前序、保持兄弟顺序。每个节点先检查名称，
/// 再检查文本内容，都不匹配才进入子节点。使用显式栈，
/// 遍历深度不受调用栈限制。关键字为空时返回 `None`。
pub fn find_node<'a>(scope: &SearchScope<'a>, key_text: &str) -> Option<&'a DesignNode> {
    if key_text.is_empty() {
        return None;
    }

    let mut stack: Vec<&'a DesignNode> = scope.nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if node.name_contains(key_text) {
            debug!("Node matched by name: {} ({})", node.id, node.name);
            return Some(node);
        }
        if node.text_contains(key_text) {
            debug!("Text node matched by content: {}", node.id);
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }

    None
}

#[cfg(test)]
#[path = "node_locator_test.rs"]
mod tests;
