//! A fixed response that confirms the server is up.

use axum::Json;

/// The body returned by the health check route.
pub const HEALTH_CHECK_MESSAGE: &str = "test ok";

/// Confirm the service is running. Never fails.
pub fn health_check() -> &'static str {
    HEALTH_CHECK_MESSAGE
}

/// A route handler that responds with [HEALTH_CHECK_MESSAGE] as a JSON string.
pub async fn get_health_check() -> Json<&'static str> {
    Json(health_check())
}
