use serde::Serialize;

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
