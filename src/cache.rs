// src/cache.rs

//! Key/value cache abstraction with TTL semantics.
//!
//! The rotation feature only needs get/set with per-entry expiry. Backends
//! are expected to be best-effort: concurrent writers race with
//! last-write-wins, which is acceptable for a cache that only trades
//! recomputation cost for freshness.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::error::Result;

/// Trait for TTL-aware cache backends.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Fetch a value, returning None when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value with a time-to-live in seconds.
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()>;
}

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-process cache backend.
///
/// Suitable for single-process hosts and tests; multi-worker deployments
/// should use a shared backend instead.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
        };
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), entry);
        Ok(())
    }
}
