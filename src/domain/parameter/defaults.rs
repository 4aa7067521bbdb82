use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Duration;

/// Expiry applied to freshly fetched parameters unless overridden
pub const DEFAULT_EXPIRY_SECS: i64 = 30;

#[derive(Debug)]
struct DefaultsInner {
    expiry_millis: AtomicI64,
    decryption: AtomicBool,
}

/// Tunable policy shared by every cache built from the same handle
///
/// Clones share state, so a setter called on any clone is visible to all of
/// them. Values are read when a refresh runs; entries already cached keep
/// the expiry they were written with.
#[derive(Debug, Clone)]
pub struct CacheDefaults {
    inner: Arc<DefaultsInner>,
}

impl CacheDefaults {
    pub fn new(expiry: Duration, decryption: bool) -> Self {
        Self {
            inner: Arc::new(DefaultsInner {
                expiry_millis: AtomicI64::new(expiry.num_milliseconds()),
                decryption: AtomicBool::new(decryption),
            }),
        }
    }

    /// Duration added to "now" when an entry is refreshed.
    ///
    /// Stored with millisecond precision. Zero or negative values make every
    /// entry stale on its next access.
    pub fn expiry(&self) -> Duration {
        Duration::milliseconds(self.inner.expiry_millis.load(Ordering::Acquire))
    }

    pub fn set_expiry(&self, expiry: Duration) {
        self.inner
            .expiry_millis
            .store(expiry.num_milliseconds(), Ordering::Release);
    }

    /// Whether unqualified fetches ask the store to decrypt
    pub fn decryption(&self) -> bool {
        self.inner.decryption.load(Ordering::Acquire)
    }

    pub fn set_decryption(&self, decryption: bool) {
        self.inner.decryption.store(decryption, Ordering::Release);
    }
}

impl Default for CacheDefaults {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_EXPIRY_SECS), false)
    }
}
