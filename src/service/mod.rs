//! 服務層模組
//!
//! 提供 HTTP 服務所需的路由、共享狀態和設定

pub mod api;
pub mod config;

pub use api::{router, ApiError, AppState, ScoreResponse};
pub use config::{ConfigError, ServerConfig};
