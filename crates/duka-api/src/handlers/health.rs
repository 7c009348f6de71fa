//! Health check handlers.

use axum::Json;
use axum::extract::State;

use duka_core::error::AppError;
use duka_core::traits::cache::CacheProvider;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
pub async fn detailed_health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DetailedHealthResponse>>, AppError> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
    {
        Ok(1) => "ok",
        _ => "unavailable",
    };

    let cache = match state.cache.health_check().await {
        Ok(true) => "ok",
        _ => "unavailable",
    };

    let status = if database == "ok" && cache == "ok" {
        "ok"
    } else {
        "degraded"
    };

    Ok(Json(ApiResponse::ok(DetailedHealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        cache: cache.to_string(),
    })))
}
