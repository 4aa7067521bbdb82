use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read access to cached parameters
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ParameterCache: Send + Sync {
    /// Returns the cached value, refreshing it first when missing or stale.
    ///
    /// Uses the default decryption flag.
    async fn get(&self, key: &str) -> Result<String, DomainError>;

    /// Same as [`ParameterCache::get`] with an explicit decryption flag
    async fn get_with_option(&self, key: &str, decrypt: bool) -> Result<String, DomainError>;

    /// Refreshes the parameter regardless of freshness.
    ///
    /// The fetched value is stored but not returned.
    async fn force_refresh(&self, key: &str) -> Result<(), DomainError>;

    /// Same as [`ParameterCache::force_refresh`] with an explicit decryption flag
    async fn force_refresh_with_option(&self, key: &str, decrypt: bool)
    -> Result<(), DomainError>;
}
