//! Ping Handler
//!
//! 健康检查，同时报告插图服务是否可用

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<ApiResponse<PingResponse>> {
    let status = if state.image_generator.health_check().await {
        "ok"
    } else {
        "degraded"
    };

    Json(ApiResponse::success(PingResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
    }))
}
