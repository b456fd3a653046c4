// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 设计节点（design_node）：设计文件的文档树
/// - 截图（screenshot）：截图请求、发布结果和公开ID生成
pub mod design_node;
pub mod screenshot;
