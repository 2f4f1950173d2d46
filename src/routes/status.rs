//! Root endpoint reporting which instance and cloud served the request.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::{GREETING, STATUS_RUNNING};
use crate::state::AppState;

/// Body of `GET /`. Field order is the serialized key order.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub message: &'static str,
    pub cloud: String,
    pub pod: String,
    pub status: &'static str,
}

pub async fn index(State(state): State<AppState>) -> Json<StatusReport> {
    let report = StatusReport {
        message: GREETING,
        cloud: state.identity.cloud_provider(),
        pod: state.identity.hostname(),
        status: STATUS_RUNNING,
    };

    tracing::debug!(cloud = %report.cloud, pod = %report.pod, "Reporting status");

    Json(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::identity::StaticIdentity;

    #[tokio::test]
    async fn test_index_reports_identity() {
        let state = AppState::with_identity(AppConfig::default(), StaticIdentity::new("web-7", "GCP"));

        let Json(report) = index(State(state)).await;

        assert_eq!(report.message, "Hello from Multi-Cloud GitOps Pipeline [v1]");
        assert_eq!(report.cloud, "GCP");
        assert_eq!(report.pod, "web-7");
        assert_eq!(report.status, "Running");
    }

    #[test]
    fn test_report_key_order() {
        let report = StatusReport {
            message: GREETING,
            cloud: "AWS".to_string(),
            pod: "host".to_string(),
            status: STATUS_RUNNING,
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"message":"Hello from Multi-Cloud GitOps Pipeline [v1]","cloud":"AWS","pod":"host","status":"Running"}"#
        );
    }
}
