use axum::{extract::State, http::Uri};

use crate::{error::AppError, AppState};

/// Liveness probe. Constant body, no logging, no state touched.
pub async fn health(State(state): State<AppState>) -> &'static str {
    state.service.health_status()
}

pub async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
