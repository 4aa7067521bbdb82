//! CLI module for the SSM parameter cache
//!
//! Provides subcommands that read parameters through a cache:
//! - `get`: read one or more parameters once
//! - `watch`: poll a parameter and show cache hits and refreshes

pub mod get;
pub mod watch;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::parameter::CacheDefaults;
use crate::infrastructure::logging;
use crate::infrastructure::parameter::{InMemoryParameterCache, SsmParameterFetcher};

/// Read-through cache for AWS SSM Parameter Store values
#[derive(Parser)]
#[command(name = "ssm-param-cache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read parameters once and print them
    Get(get::GetArgs),

    /// Poll a parameter through the cache
    Watch(watch::WatchArgs),
}

/// Loads configuration, installs logging and builds an SSM-backed cache
pub(crate) async fn bootstrap() -> anyhow::Result<InMemoryParameterCache<SsmParameterFetcher>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    logging::init_logging(&config.logging);

    let defaults = config.cache.to_defaults()?;
    let fetcher = SsmParameterFetcher::from_settings(&config.aws).await;

    Ok(InMemoryParameterCache::with_defaults(
        std::sync::Arc::new(fetcher),
        defaults,
    ))
}

/// Explicit `--decrypt` value wins over the configured default
pub(crate) fn resolve_decrypt(flag: Option<bool>, defaults: &CacheDefaults) -> bool {
    flag.unwrap_or_else(|| defaults.decryption())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrypt_flag_overrides_config_both_ways() {
        let defaults = CacheDefaults::default();
        defaults.set_decryption(true);
        assert!(!resolve_decrypt(Some(false), &defaults));
        assert!(resolve_decrypt(None, &defaults));

        defaults.set_decryption(false);
        assert!(resolve_decrypt(Some(true), &defaults));
        assert!(!resolve_decrypt(None, &defaults));
    }

    #[test]
    fn test_decrypt_flag_parsing() {
        let cli = Cli::try_parse_from(["ssm-param-cache", "get", "/a", "--decrypt", "false"]).unwrap();
        match cli.command {
            Command::Get(args) => assert_eq!(args.decrypt, Some(false)),
            Command::Watch(_) => panic!("expected get command"),
        }

        let cli = Cli::try_parse_from(["ssm-param-cache", "watch", "/a"]).unwrap();
        match cli.command {
            Command::Watch(args) => assert_eq!(args.decrypt, None),
            Command::Get(_) => panic!("expected watch command"),
        }
    }
}
