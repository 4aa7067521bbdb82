//! Layered application configuration

mod app_config;

pub use app_config::{AppConfig, AwsSettings, CacheSettings, LogFormat, LoggingConfig};
