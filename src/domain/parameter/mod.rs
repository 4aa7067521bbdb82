//! Parameter caching domain

mod cache;
mod defaults;
mod fetcher;

pub use cache::ParameterCache;
pub use defaults::{CacheDefaults, DEFAULT_EXPIRY_SECS};
pub use fetcher::ParameterFetcher;

#[cfg(test)]
pub use cache::MockParameterCache;
#[cfg(test)]
pub use fetcher::MockParameterFetcher;
