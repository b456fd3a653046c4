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

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 进程启动时加载一次，之后只读
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 设计文件API配置
    pub figma: FigmaSettings,
    /// 图床配置
    pub cloudinary: CloudinarySettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 设计文件API配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FigmaSettings {
    /// 个人访问令牌
    #[serde(default)]
    pub access_token: String,
    /// API基础URL
    pub api_base_url: String,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
}

impl FigmaSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 图床配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CloudinarySettings {
    #[serde(default)]
    pub cloud_name: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    /// API基础URL
    pub api_base_url: String,
    /// 截图上传目录
    pub folder: String,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
}

impl CloudinarySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用Prometheus导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// `FIGSHOT__*` 环境变量和部署平台上的旧环境变量，并校验凭据
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败或缺少凭据
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("FIGSHOT").separator("__"))
            // Plain variable names set by the serverless platform
            .set_override_option("figma.access_token", std::env::var("FIGMA_ACCESS_TOKEN").ok())?
            .set_override_option(
                "cloudinary.cloud_name",
                std::env::var("CLOUDINARY_CLOUD_NAME").ok(),
            )?
            .set_override_option("cloudinary.api_key", std::env::var("CLOUDINARY_API_KEY").ok())?
            .set_override_option(
                "cloudinary.api_secret",
                std::env::var("CLOUDINARY_API_SECRET").ok(),
            )?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 注册默认值
    pub fn with_defaults<St: config::builder::BuilderState>(
        builder: config::builder::ConfigBuilder<St>,
    ) -> Result<config::builder::ConfigBuilder<St>, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("figma.api_base_url", "https://api.figma.com")?
            .set_default("figma.timeout_secs", 30)?
            .set_default("cloudinary.api_base_url", "https://api.cloudinary.com")?
            .set_default("cloudinary.folder", "figma-screenshots")?
            .set_default("cloudinary.timeout_secs", 60)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }

    /// 校验必需的凭据
    ///
    /// 任一凭据缺失或为空都会返回错误，进程不带着不完整的凭据启动
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("figma.access_token", &self.figma.access_token),
            ("cloudinary.cloud_name", &self.cloudinary.cloud_name),
            ("cloudinary.api_key", &self.cloudinary.api_key),
            ("cloudinary.api_secret", &self.cloudinary.api_secret),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::NotFound(key.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
