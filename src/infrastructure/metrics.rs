// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

pub const SCREENSHOT_REQUESTS_TOTAL: &str = "figshot_screenshot_requests_total";
pub const SCREENSHOT_DURATION_SECONDS: &str = "figshot_screenshot_duration_seconds";

pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics listen address {}: {}. Metrics exporter not started.",
                settings.listen_addr, e
            );
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次截图请求的结果与耗时
pub fn record_screenshot(outcome: &'static str, elapsed: Duration) {
    ::metrics::counter!(SCREENSHOT_REQUESTS_TOTAL, "outcome" => outcome).increment(1);
    ::metrics::histogram!(SCREENSHOT_DURATION_SECONDS, "outcome" => outcome)
        .record(elapsed.as_secs_f64());
}
