//! Health check endpoint for container orchestration.
//!
//! Liveness probe for Kubernetes, ECS, and load balancers. It only proves the
//! process can answer HTTP; it never inspects the environment.

use axum::Json;
use serde::Serialize;

use crate::config::STATUS_HEALTHY;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
}

/// Health check handler. Always 200 with `{"status": "healthy"}`.
pub async fn health() -> Json<HealthReport> {
    Json(HealthReport {
        status: STATUS_HEALTHY,
    })
}
