//! AsyncData - 异步数据状态模型
//!
//! 描述任意异步获取/计算的值的生命周期:
//! NOT_STARTED -> LOADING -> LOADED / FAILED_TO_LOAD，
//! 刷新时 LOADED -> RELOADING（保留旧值供展示）
//!
//! 不变量:
//! - 只有 LOADED 和 RELOADING 携带值
//! - 只有 LOADING 和 RELOADING 视为"进行中"
//! - 只有 FAILED_TO_LOAD 携带错误

use serde::{Deserialize, Serialize};

/// 异步数据状态
///
/// 序列化格式: `{"status": "LOADED", "data": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AsyncData<T, E = String> {
    /// 尚未开始
    NotStarted,
    /// 加载中（无可用值）
    Loading,
    /// 已加载
    Loaded { data: T },
    /// 加载失败
    FailedToLoad { error: E },
    /// 重新加载中（保留旧值）
    Reloading { data: T },
}

impl<T, E> AsyncData<T, E> {
    pub fn not_started() -> Self {
        Self::NotStarted
    }

    pub fn loading() -> Self {
        Self::Loading
    }

    pub fn loaded(data: T) -> Self {
        Self::Loaded { data }
    }

    pub fn failed(error: E) -> Self {
        Self::FailedToLoad { error }
    }

    pub fn reloading(data: T) -> Self {
        Self::Reloading { data }
    }

    /// 是否正在加载（LOADING 或 RELOADING）
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading | Self::Reloading { .. })
    }

    /// 是否有可用值（LOADED 或 RELOADING）
    pub fn is_ready(&self) -> bool {
        self.has_value()
    }

    pub fn has_value(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Reloading { .. })
    }

    pub fn has_error(&self) -> bool {
        matches!(self, Self::FailedToLoad { .. })
    }

    /// 借用当前值（仅 LOADED / RELOADING）
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded { data } | Self::Reloading { data } => Some(data),
            _ => None,
        }
    }

    /// 借用错误（仅 FAILED_TO_LOAD）
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::FailedToLoad { error } => Some(error),
            _ => None,
        }
    }

    /// 取出当前值
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Loaded { data } | Self::Reloading { data } => Some(data),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> AsyncData<&T, &E> {
        match self {
            Self::NotStarted => AsyncData::NotStarted,
            Self::Loading => AsyncData::Loading,
            Self::Loaded { data } => AsyncData::Loaded { data },
            Self::FailedToLoad { error } => AsyncData::FailedToLoad { error },
            Self::Reloading { data } => AsyncData::Reloading { data },
        }
    }

    pub fn map<U, F>(self, f: F) -> AsyncData<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::NotStarted => AsyncData::NotStarted,
            Self::Loading => AsyncData::Loading,
            Self::Loaded { data } => AsyncData::Loaded { data: f(data) },
            Self::FailedToLoad { error } => AsyncData::FailedToLoad { error },
            Self::Reloading { data } => AsyncData::Reloading { data: f(data) },
        }
    }

    /// 开始刷新
    ///
    /// 有值时转为 RELOADING 保留旧值，否则转为 LOADING
    pub fn into_reloading(self) -> Self {
        match self {
            Self::Loaded { data } | Self::Reloading { data } => Self::Reloading { data },
            _ => Self::Loading,
        }
    }
}

impl<T: Clone, E> AsyncData<T, E> {
    /// 获取值，无值时返回 fallback
    pub fn get_value(&self, fallback: T) -> T {
        self.value().cloned().unwrap_or(fallback)
    }
}

impl<T, E> Default for AsyncData<T, E> {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<AsyncData<String>> {
        vec![
            AsyncData::not_started(),
            AsyncData::loading(),
            AsyncData::loaded("fresh".to_string()),
            AsyncData::failed("boom".to_string()),
            AsyncData::reloading("stale".to_string()),
        ]
    }

    #[test]
    fn test_get_value_per_variant() {
        let values: Vec<String> = all_variants()
            .iter()
            .map(|d| d.get_value("fallback".to_string()))
            .collect();

        assert_eq!(
            values,
            vec!["fallback", "fallback", "fresh", "fallback", "stale"]
        );
    }

    #[test]
    fn test_predicates() {
        let loading: Vec<bool> = all_variants().iter().map(|d| d.is_loading()).collect();
        assert_eq!(loading, vec![false, true, false, false, true]);

        let ready: Vec<bool> = all_variants().iter().map(|d| d.is_ready()).collect();
        assert_eq!(ready, vec![false, false, true, false, true]);

        let errored: Vec<bool> = all_variants().iter().map(|d| d.has_error()).collect();
        assert_eq!(errored, vec![false, false, false, true, false]);
    }

    #[test]
    fn test_error_only_on_failed() {
        let failed: AsyncData<String> = AsyncData::failed("Transcription failed".to_string());
        assert_eq!(failed.error().map(String::as_str), Some("Transcription failed"));
        assert!(failed.value().is_none());
        assert!(AsyncData::<String>::loaded("x".to_string()).error().is_none());
    }

    #[test]
    fn test_into_reloading_keeps_stale_value() {
        let data: AsyncData<String> = AsyncData::loaded("old".to_string());
        let reloading = data.into_reloading();
        assert!(reloading.is_loading());
        assert_eq!(reloading.value().map(String::as_str), Some("old"));

        let failed: AsyncData<String> = AsyncData::failed("e".to_string());
        assert_eq!(failed.into_reloading(), AsyncData::Loading);
    }

    #[test]
    fn test_serde_format() {
        let data: AsyncData<String> = AsyncData::loaded("Hello".to_string());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({"status": "LOADED", "data": "Hello"}));

        let json = serde_json::to_value(AsyncData::<String>::failed("nope".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "FAILED_TO_LOAD", "error": "nope"}));

        let parsed: AsyncData<String> =
            serde_json::from_str(r#"{"status":"NOT_STARTED"}"#).unwrap();
        assert_eq!(parsed, AsyncData::NotStarted);
    }

    #[test]
    fn test_map_preserves_status() {
        let data: AsyncData<String> = AsyncData::reloading("abc".to_string());
        assert_eq!(data.map(|s| s.len()), AsyncData::Reloading { data: 3 });
    }
}
