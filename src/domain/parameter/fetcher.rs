use async_trait::async_trait;

use crate::domain::FetchError;

#[cfg(test)]
use mockall::automock;

/// Remote parameter store capability
///
/// One attempt per call; implementations must not retry internally. Any
/// timeout belongs to the implementation, the cache never cancels a fetch.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ParameterFetcher: Send + Sync {
    /// Fetch the current value of a parameter
    async fn fetch(&self, name: &str, with_decryption: bool) -> Result<String, FetchError>;
}
