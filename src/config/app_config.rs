use chrono::Duration;
use serde::Deserialize;

use crate::domain::parameter::{CacheDefaults, DEFAULT_EXPIRY_SECS};
use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub cache: CacheSettings,
    pub aws: AwsSettings,
    pub logging: LoggingConfig,
}

/// Initial cache policy
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Seconds a fetched value stays fresh; zero or negative disables caching
    pub default_expiry_secs: i64,
    pub default_decrypt: bool,
}

/// Overrides for the AWS client; unset fields fall back to the shared config chain
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            default_expiry_secs: DEFAULT_EXPIRY_SECS,
            default_decrypt: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl CacheSettings {
    /// Builds the runtime defaults handle from these settings
    pub fn to_defaults(&self) -> Result<CacheDefaults, DomainError> {
        let expiry = Duration::try_seconds(self.default_expiry_secs).ok_or_else(|| {
            DomainError::configuration(format!(
                "default_expiry_secs out of range: {}",
                self.default_expiry_secs
            ))
        })?;

        Ok(CacheDefaults::new(expiry, self.default_decrypt))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder().build()?.try_deserialize()
    }

    fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("SSMCACHE")
                    .separator("__")
                    .try_parsing(true),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.cache.default_expiry_secs, 30);
        assert!(!config.cache.default_decrypt);
        assert_eq!(config.aws.region, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_settings_to_defaults() {
        let settings = CacheSettings {
            default_expiry_secs: 120,
            default_decrypt: true,
        };

        let defaults = settings.to_defaults().unwrap();

        assert_eq!(defaults.expiry(), Duration::minutes(2));
        assert!(defaults.decryption());
    }

    #[test]
    fn test_out_of_range_expiry_is_rejected() {
        let settings = CacheSettings {
            default_expiry_secs: i64::MAX,
            default_decrypt: false,
        };

        assert!(matches!(
            settings.to_defaults(),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_partial_source_keeps_remaining_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("cache.default_expiry_secs", 5)
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.cache.default_expiry_secs, 5);
        assert!(!config.cache.default_decrypt);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }
}
