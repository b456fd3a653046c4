// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志
///
/// 级别由 `RUST_LOG` 控制；`FIGSHOT_LOG_FORMAT=json` 时输出JSON格式
pub fn init_telemetry() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,figshot=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json_logs_requested(std::env::var("FIGSHOT_LOG_FORMAT").ok().as_deref()) {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn json_logs_requested(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}
