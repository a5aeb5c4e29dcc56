//! Shared Book HTTP Handlers
//!
//! 在线分享副本的创建、读取和覆盖

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetSharedBook, PublishSharedBook, UpdateSharedBook};
use crate::domain::book::Book;
use crate::infrastructure::http::dto::{ApiResponse, IdResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 发布分享副本，返回服务端分配的 id
pub async fn create_shared_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    let Json(book) = payload?;

    let result = state
        .publish_shared_book_handler
        .handle(PublishSharedBook { book })
        .await?;

    Ok(Json(ApiResponse::success(IdResponse {
        id: result.remote_id,
    })))
}

/// 读取分享副本
pub async fn get_shared_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Book>>, ApiError> {
    let book = state
        .get_shared_book_handler
        .handle(GetSharedBook { remote_id: id })
        .await?;

    Ok(Json(ApiResponse::success(book)))
}

/// 覆盖分享副本
pub async fn update_shared_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    let Json(book) = payload?;

    let result = state
        .update_shared_book_handler
        .handle(UpdateSharedBook {
            remote_id: id,
            book,
        })
        .await?;

    Ok(Json(ApiResponse::success(IdResponse {
        id: result.remote_id,
    })))
}
