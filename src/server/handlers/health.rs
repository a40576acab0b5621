use axum::{http::StatusCode, response::IntoResponse};

/// Liveness probe. Does not touch the CRL store.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "healthy")
}
