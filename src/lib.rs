//! SSM Parameter Cache
//!
//! A read-through, time-expiring in-memory cache for AWS SSM Parameter Store
//! values:
//! - A single cache-wide lock serializes lookups and refreshes
//! - Shared, runtime-tunable defaults for expiry and decryption
//! - Forced refresh for rotated parameters
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ssm_param_cache::domain::parameter::ParameterCache;
//! use ssm_param_cache::infrastructure::parameter::{InMemoryParameterCache, SsmParameterFetcher};
//!
//! # async fn example() -> Result<(), ssm_param_cache::DomainError> {
//! let fetcher = SsmParameterFetcher::from_env().await;
//! let cache = InMemoryParameterCache::new(Arc::new(fetcher));
//!
//! let password = cache.get_with_option("/app/db/password", true).await?;
//! println!("password has {} characters", password.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::parameter::{CacheDefaults, ParameterCache, ParameterFetcher};
pub use domain::{DomainError, FetchError};
pub use infrastructure::parameter::{InMemoryParameterCache, SsmParameterFetcher};
