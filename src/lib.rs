//! Tiny Tales - 语音绘本制作
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - AsyncData: 异步数据状态模型
//! - Book Context: 绘本与页面
//! - Editor Context: 编辑器状态机（Reducer、派生视图、插图提示词）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（KeyValueStore, RemoteBookStore, Transcriber, ImageGenerator）
//! - Commands / Queries: CQRS 处理器
//! - Library: 本地绘本库
//! - EditorSession: 转写与插图生成的异步流程编排
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 分享存储与转写/插图代理 API
//! - Memory: 内存存储实现
//! - Persistence: Sled 分享存储
//! - Adapters: OpenAI 客户端、分享服务客户端、文件存储、Fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
