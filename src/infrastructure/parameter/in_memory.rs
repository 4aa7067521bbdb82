//! In-memory read-through parameter cache
//!
//! Every operation, including the remote fetch, runs under one cache-wide
//! lock. Requests for unrelated keys queue behind each other, and at most one
//! fetch is in flight per cache at any time.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::parameter::{CacheDefaults, ParameterCache, ParameterFetcher};
use crate::domain::DomainError;

/// Cached parameter value
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires: DateTime<Utc>,
}

impl CacheEntry {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires
    }
}

fn expiry_from(now: DateTime<Utc>, expiry: Duration) -> DateTime<Utc> {
    now.checked_add_signed(expiry).unwrap_or(if expiry < Duration::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Parameter cache backed by a `HashMap` behind a single async mutex
pub struct InMemoryParameterCache<F: ParameterFetcher + ?Sized> {
    entries: Mutex<HashMap<String, CacheEntry>>,
    fetcher: Arc<F>,
    defaults: CacheDefaults,
}

impl<F: ParameterFetcher + ?Sized> InMemoryParameterCache<F> {
    /// Creates an empty cache with the stock defaults (30s, no decryption)
    pub fn new(fetcher: Arc<F>) -> Self {
        Self::with_defaults(fetcher, CacheDefaults::default())
    }

    /// Creates an empty cache sharing the given defaults handle
    pub fn with_defaults(fetcher: Arc<F>, defaults: CacheDefaults) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fetcher,
            defaults,
        }
    }

    pub fn defaults(&self) -> &CacheDefaults {
        &self.defaults
    }

    /// Expiry of the cached entry for `key`, if one exists
    pub async fn expires_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries.lock().await.get(key).map(|e| e.expires)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Fetches `key` and overwrites its entry. The caller must hold the lock.
    async fn refresh(
        &self,
        entries: &mut HashMap<String, CacheEntry>,
        key: &str,
        decrypt: bool,
    ) -> Result<String, DomainError> {
        info!(key, decrypt, "Updating parameter from store");

        let value = match self.fetcher.fetch(key, decrypt).await {
            Ok(value) => value,
            Err(source) => {
                warn!(key, error = %source, "Parameter refresh failed");
                return Err(DomainError::fetch(key, source));
            }
        };

        let expires = expiry_from(Utc::now(), self.defaults.expiry());
        entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.clone(),
                expires,
            },
        );

        info!(key, %expires, "Parameter refreshed");

        Ok(value)
    }
}

impl<F: ParameterFetcher + ?Sized> fmt::Debug for InMemoryParameterCache<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryParameterCache")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<F: ParameterFetcher + ?Sized> ParameterCache for InMemoryParameterCache<F> {
    async fn get(&self, key: &str) -> Result<String, DomainError> {
        self.get_with_option(key, self.defaults.decryption()).await
    }

    async fn get_with_option(&self, key: &str, decrypt: bool) -> Result<String, DomainError> {
        let mut entries = self.entries.lock().await;
        let now = Utc::now();

        match entries.get(key) {
            Some(entry) if entry.is_fresh(now) => {
                debug!(key, "Cache hit for parameter");
                return Ok(entry.value.clone());
            }
            Some(entry) => {
                debug!(key, expires = %entry.expires, "Cached parameter expired, refreshing");
            }
            None => {
                debug!(key, "Cache miss, fetching parameter");
            }
        }

        self.refresh(&mut entries, key, decrypt).await
    }

    async fn force_refresh(&self, key: &str) -> Result<(), DomainError> {
        self.force_refresh_with_option(key, self.defaults.decryption())
            .await
    }

    async fn force_refresh_with_option(
        &self,
        key: &str,
        decrypt: bool,
    ) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().await;
        self.refresh(&mut entries, key, decrypt).await.map(|_| ())
    }
}
