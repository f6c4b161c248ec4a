use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use sysinfo::System;
use tracing::{info, warn};

use crate::{application::services::paste_service::PasteService, domain::config::server::BurnPolicy};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(rename = "burnPolicy")]
    pub burn_policy: String,
    pub metrics: SystemMetrics,
}

#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    #[serde(rename = "cpuUsagePercent")]
    pub cpu_usage_percent: f32,
    #[serde(rename = "memoryUsedBytes")]
    pub memory_used_bytes: u64,
    #[serde(rename = "memoryTotalBytes")]
    pub memory_total_bytes: u64,
    #[serde(rename = "memoryUsagePercent")]
    pub memory_usage_percent: f32,
}

pub struct HealthController;

impl HealthController {
    /// GET /api/health
    pub async fn health_check(
        State(paste_service): State<PasteService>,
    ) -> (StatusCode, Json<HealthResponse>) {
        info!("Health check requested");

        let (status_code, status, database) = match paste_service.ping().await {
            Ok(()) => (StatusCode::OK, "healthy", "ok"),
            Err(e) => {
                warn!("Database ping failed: {}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
            }
        };

        let burn_policy = match paste_service.burn_policy() {
            BurnPolicy::SecondRead => "second-read",
            BurnPolicy::FirstRead => "first-read",
        };

        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let memory_used = sys.used_memory();
        let memory_total = sys.total_memory();
        let memory_usage_percent = if memory_total > 0 {
            (memory_used as f32 / memory_total as f32) * 100.0
        } else {
            0.0
        };

        (
            status_code,
            Json(HealthResponse {
                status: status.to_string(),
                database: database.to_string(),
                burn_policy: burn_policy.to_string(),
                metrics: SystemMetrics {
                    cpu_usage_percent: sys.global_cpu_usage(),
                    memory_used_bytes: memory_used,
                    memory_total_bytes: memory_total,
                    memory_usage_percent,
                },
            }),
        )
    }
}
