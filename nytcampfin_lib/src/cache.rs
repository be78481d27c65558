//! Response cache for the caching transport.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// How long responses stay cached unless configured otherwise.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// Serialized API responses keyed by request URL, each living for one TTL.
///
/// A stale entry is dropped when its URL is read again. Writes also sweep
/// the whole map, at most once per TTL, so URLs that are never requested
/// twice (successive offsets, say) don't pile up.
pub struct MemoryCache {
    store: DashMap<String, CacheEntry>,
    ttl: Duration,
    last_sweep: Mutex<Instant>,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
            last_sweep: Mutex::new(Instant::now()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The stored response for `url`, unless it has expired.
    pub fn get(&self, url: &str) -> Option<String> {
        let entry = self.store.get(url)?;
        if Instant::now() >= entry.expires_at {
            drop(entry);
            self.store.remove(url);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Stores `response` under `url` for one TTL. No-op with a zero TTL.
    pub fn set(&self, url: String, response: String) {
        if self.ttl.is_zero() {
            return;
        }
        let now = Instant::now();
        self.sweep_if_due(now);
        self.store.insert(
            url,
            CacheEntry {
                value: response,
                expires_at: now + self.ttl,
            },
        );
    }

    fn sweep_if_due(&self, now: Instant) {
        let due = match self.last_sweep.lock() {
            Ok(mut last) if now.duration_since(*last) >= self.ttl => {
                *last = now;
                true
            }
            _ => false,
        };
        if due {
            self.purge_expired();
        }
    }

    /// Drops every expired entry.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.store.retain(|_, entry| entry.expires_at > now);
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}
