//! HTTP Remote Book Client - 调用分享服务的 /api/books 接口
//!
//! 实现 RemoteBookStorePort trait
//!
//! 服务端 API（统一信封 {"errno","error","data"}）:
//! POST {base_url}/api/books        Book -> {"id": "..."}
//! GET  {base_url}/api/books/{id}   -> Book
//! PUT  {base_url}/api/books/{id}   Book -> {"id": "..."}

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{RemoteBookStorePort, RemoteStoreError};
use crate::domain::book::Book;

const ERRNO_NOT_FOUND: i32 = 404;

/// 统一响应信封
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    errno: i32,
    #[serde(default)]
    error: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct IdPayload {
    id: String,
}

/// HTTP 分享客户端配置
#[derive(Debug, Clone)]
pub struct HttpRemoteBookClientConfig {
    /// 分享服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpRemoteBookClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5060".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpRemoteBookClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 分享客户端
pub struct HttpRemoteBookClient {
    client: Client,
    config: HttpRemoteBookClientConfig,
}

impl HttpRemoteBookClient {
    pub fn new(config: HttpRemoteBookClientConfig) -> Result<Self, RemoteStoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RemoteStoreError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn books_url(&self) -> String {
        format!("{}/api/books", self.config.base_url.trim_end_matches('/'))
    }

    fn book_url(&self, id: &str) -> String {
        format!("{}/{}", self.books_url(), id)
    }

    /// 发送请求并解析信封；errno 非 0 时按错误码映射
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        id: &str,
    ) -> Result<T, RemoteStoreError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RemoteStoreError::NetworkError("Request timeout".to_string())
            } else if e.is_connect() {
                RemoteStoreError::NetworkError(format!("Cannot connect to share service: {}", e))
            } else {
                RemoteStoreError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RemoteStoreError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| RemoteStoreError::SerializationError(e.to_string()))?;

        match envelope.errno {
            0 => envelope.data.ok_or_else(|| {
                RemoteStoreError::SerializationError("Response has no data".to_string())
            }),
            ERRNO_NOT_FOUND => Err(RemoteStoreError::NotFound(id.to_string())),
            errno => Err(RemoteStoreError::ServiceError(format!(
                "errno {}: {}",
                errno, envelope.error
            ))),
        }
    }
}

#[async_trait]
impl RemoteBookStorePort for HttpRemoteBookClient {
    async fn create(&self, book: &Book) -> Result<String, RemoteStoreError> {
        let payload: IdPayload = self
            .send(self.client.post(self.books_url()).json(book), "")
            .await?;

        tracing::debug!(remote_id = %payload.id, book_id = %book.id(), "Book shared online");
        Ok(payload.id)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, RemoteStoreError> {
        match self.send::<Book>(self.client.get(self.book_url(id)), id).await {
            Ok(book) => Ok(Some(book)),
            Err(RemoteStoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn update(&self, id: &str, book: &Book) -> Result<(), RemoteStoreError> {
        let _: IdPayload = self
            .send(self.client.put(self.book_url(id)).json(book), id)
            .await?;

        tracing::debug!(remote_id = %id, "Online copy updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client =
            HttpRemoteBookClient::new(HttpRemoteBookClientConfig::new("https://tales.example/"))
                .unwrap();
        assert_eq!(client.books_url(), "https://tales.example/api/books");
        assert_eq!(client.book_url("abc"), "https://tales.example/api/books/abc");
    }

    #[test]
    fn test_envelope_parsing() {
        let ok: Envelope<IdPayload> =
            serde_json::from_str(r#"{"errno":0,"error":"","data":{"id":"r1"}}"#).unwrap();
        assert_eq!(ok.errno, 0);
        assert_eq!(ok.data.unwrap().id, "r1");

        let missing: Envelope<Book> =
            serde_json::from_str(r#"{"errno":404,"error":"not found","data":null}"#).unwrap();
        assert_eq!(missing.errno, ERRNO_NOT_FOUND);
        assert!(missing.data.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = HttpRemoteBookClient::new(
            HttpRemoteBookClientConfig::new("http://127.0.0.1:1").with_timeout(2),
        )
        .unwrap();
        let err = client.find_by_id("x").await.unwrap_err();
        assert!(matches!(err, RemoteStoreError::NetworkError(_)));
    }

    async fn spawn_share_service() -> String {
        use crate::infrastructure::adapters::{FakeImageGenerator, FakeTranscriber};
        use crate::infrastructure::http::{create_routes, AppState};
        use crate::infrastructure::memory::InMemorySharedBookStore;
        use std::sync::Arc;

        let state = AppState::new(
            Arc::new(InMemorySharedBookStore::new()),
            Arc::new(FakeTranscriber::silent()),
            Arc::new(FakeImageGenerator::new()),
        );
        let router = create_routes().with_state(Arc::new(state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_round_trip_against_share_routes() {
        use crate::domain::book::{BookId, Page, PageId};

        let base_url = spawn_share_service().await;
        let client =
            HttpRemoteBookClient::new(HttpRemoteBookClientConfig::new(base_url).with_timeout(5))
                .unwrap();

        let book = Book::new(
            BookId::from("b1"),
            "Moon",
            vec![Page::new(PageId::from("p1"), "The moon rises", "")],
        );
        let remote_id = client.create(&book).await.unwrap();
        assert!(!remote_id.is_empty());

        let fetched = client.find_by_id(&remote_id).await.unwrap().unwrap();
        assert_eq!(fetched.title(), "Moon");
        assert_eq!(fetched.pages(), book.pages());

        let renamed = book.with_content("Sun", book.pages().to_vec());
        client.update(&remote_id, &renamed).await.unwrap();
        let fetched = client.find_by_id(&remote_id).await.unwrap().unwrap();
        assert_eq!(fetched.title(), "Sun");

        assert!(client.find_by_id("missing").await.unwrap().is_none());
        let err = client.update("missing", &renamed).await.unwrap_err();
        assert!(matches!(err, RemoteStoreError::NotFound(id) if id == "missing"));
    }
}
