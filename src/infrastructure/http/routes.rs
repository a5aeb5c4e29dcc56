//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/books             POST  发布分享副本
//! - /api/books/:id         GET   读取分享副本
//! - /api/books/:id         PUT   覆盖分享副本
//! - /api/transcribe        POST  录音转写（multipart `file`）
//! - /api/generate-image    POST  插图生成

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/books", book_routes())
        .route("/transcribe", post(handlers::transcribe))
        .route("/generate-image", post(handlers::generate_image))
}

/// Shared book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::create_shared_book))
        .route(
            "/:id",
            get(handlers::get_shared_book).put(handlers::update_shared_book),
        )
}
