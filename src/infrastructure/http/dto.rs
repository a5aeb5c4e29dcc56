//! Data Transfer Objects

use serde::{Deserialize, Serialize};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Shared Book DTOs
// ============================================================================

/// 分享副本 id
#[derive(Debug, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: String,
}

// ============================================================================
// Media DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub prompt: String,
}
