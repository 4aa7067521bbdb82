//! Parameter cache and fetcher implementations

mod in_memory;
mod ssm_fetcher;

pub use in_memory::InMemoryParameterCache;
pub use ssm_fetcher::SsmParameterFetcher;
