use axum::response::Json;
use serde::Serialize;

/// Fixed status payload returned for every request.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub status: &'static str,
}

/// Status endpoint
///
/// Mounted as the router fallback, so it answers any method on any path.
pub async fn service_status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        service: "user-service",
        status: "running",
    })
}
