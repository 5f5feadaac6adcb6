// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::logic::{RecencyWindow, DEFAULT_RECENCY_DAYS};
use crate::logging::LoggingConfig;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// JSON file with the shoe listings.
    pub catalog_path: PathBuf,
    pub workers: usize,
    /// Days a release stays "Just Released!".
    pub recency_days: u32,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: PathBuf::from("data/shoes.json"),
            workers: 8,
            recency_days: DEFAULT_RECENCY_DAYS,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `SHOE_CARD_*` variables (a `.env` file is honoured).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("SHOE_CARD_ADDR") {
            cfg.addr = parse_var("SHOE_CARD_ADDR", &v)?;
        }
        if let Some(v) = lookup("SHOE_CARD_CATALOG") {
            cfg.catalog_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("SHOE_CARD_WORKERS") {
            cfg.workers = parse_var("SHOE_CARD_WORKERS", &v)?;
            if cfg.workers == 0 {
                return Err(invalid("SHOE_CARD_WORKERS", "must be at least 1"));
            }
        }
        if let Some(v) = lookup("SHOE_CARD_RECENCY_DAYS") {
            cfg.recency_days = parse_var("SHOE_CARD_RECENCY_DAYS", &v)?;
            if cfg.recency_days == 0 {
                return Err(invalid("SHOE_CARD_RECENCY_DAYS", "must be at least 1"));
            }
        }
        if let Some(v) = lookup("SHOE_CARD_LOG_LEVEL") {
            cfg.logging.level = v;
        }
        if let Some(v) = lookup("SHOE_CARD_LOG_FORMAT") {
            if v != "pretty" && v != "json" {
                return Err(invalid("SHOE_CARD_LOG_FORMAT", "expected 'pretty' or 'json'"));
            }
            cfg.logging.format = v;
        }

        Ok(cfg)
    }

    pub fn recency_window(&self) -> RecencyWindow {
        RecencyWindow::from_days(self.recency_days)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| invalid(var, e.to_string()))
}

fn invalid(var: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        reason: reason.into(),
    }
}
