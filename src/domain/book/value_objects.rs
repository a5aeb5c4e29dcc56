//! Book Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BookError;

/// 绘本唯一标识
///
/// 新建时为 UUID v4 字符串；从存储读取时可以是任意非空字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 解析外部传入的 ID
    pub fn parse(id: impl Into<String>) -> Result<Self, BookError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BookError::InvalidId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// 页面标识（在所属绘本内唯一）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(BookId::new(), BookId::new());
        assert_ne!(PageId::new(), PageId::new());
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(BookId::parse("  ").is_err());
        assert_eq!(BookId::parse("example").unwrap().as_str(), "example");
    }

    #[test]
    fn test_serialized_as_plain_string() {
        let id = BookId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
