use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "TIC_TAC_TOE_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address {0:?}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_addr(std::env::var(ADDR_VAR).ok())
    }

    pub fn from_addr(addr: Option<String>) -> Result<Self, ConfigError> {
        let raw = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = raw
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(raw.clone()))?;
        Ok(Self { bind_addr })
    }
}
