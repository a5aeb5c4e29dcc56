//! Remote Adapter - 在线分享服务客户端

mod http_remote_book_client;

pub use http_remote_book_client::{HttpRemoteBookClient, HttpRemoteBookClientConfig};
