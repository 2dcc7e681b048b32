//! 服務設定

use std::net::SocketAddr;

use thiserror::Error;

/// 監聽位址的環境變數
pub const ADDR_ENV: &str = "BOWLING_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid BOWLING_ADDR value {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// 從環境變數讀取，未設定時使用預設位址
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(ADDR_ENV).ok().as_deref())
    }

    pub fn from_value(addr: Option<&str>) -> Result<Self, ConfigError> {
        let value = addr.unwrap_or(DEFAULT_ADDR);
        let addr = value.parse().map_err(|source| ConfigError::InvalidAddr {
            value: value.to_string(),
            source,
        })?;
        Ok(Self { addr })
    }
}
