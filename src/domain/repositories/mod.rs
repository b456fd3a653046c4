// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义领域层依赖的外部服务接口，具体实现由基础设施层提供：
/// - 设计文件仓库（design_repository）：读取文档树、渲染节点
/// - 图床仓库（image_host_repository）：从远程URL上传图片
pub mod design_repository;
pub mod image_host_repository;
