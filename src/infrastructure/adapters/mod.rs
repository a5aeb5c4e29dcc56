//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod fake;
pub mod openai;
pub mod remote;
pub mod storage;

pub use fake::*;
pub use openai::*;
pub use remote::*;
pub use storage::*;
