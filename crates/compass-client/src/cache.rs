//! Keyed store of fetched query results.
//!
//! Entries are written only by queries. Mutations never write values; they
//! call [`QueryCache::invalidate`], which marks matching entries stale so
//! the next read refetches.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;

/// Ordered key segments, e.g. `["compassView", "2024-01-01"]`. A key
/// matches any prefix of itself, so `["compassView"]` names the family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(":"))
    }
}

struct Entry {
    value: Value,
    stale: bool,
}

#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    invalidations: AtomicU64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, stale or not.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.lock();
        let entry = entries.get(key)?;
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// `None` when nothing is cached under `key`.
    pub fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        self.lock().get(key).map(|e| e.stale)
    }

    /// Store a freshly fetched value.
    pub fn set<T: Serialize>(&self, key: QueryKey, value: &T) -> Result<(), ClientError> {
        let value = serde_json::to_value(value).map_err(|e| ClientError::Decode(e.to_string()))?;
        self.lock().insert(key, Entry { value, stale: false });
        Ok(())
    }

    /// Mark every entry under `prefix` stale. Returns how many entries
    /// were affected; the call is counted even when nothing matched.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.lock();
        let mut affected = 0;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.stale = true;
                affected += 1;
            }
        }
        debug!(key = %prefix, affected, "invalidated queries");
        affected
    }

    /// Number of [`invalidate`](Self::invalidate) calls made so far.
    pub fn invalidation_count(&self) -> u64 {
        self.invalidations.load(Ordering::SeqCst)
    }

    /// Return the cached value when it is fresh, otherwise run `fetcher`
    /// and cache what it returns. Fetch errors leave the cache untouched.
    pub async fn fetch_query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, ClientError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        if self.is_stale(&key) == Some(false)
            && let Some(value) = self.get(&key)
        {
            return Ok(value);
        }

        debug!(key = %key, "fetching query");
        let value = fetcher().await?;
        self.set(key, &value)?;
        Ok(value)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<QueryKey, Entry>> {
        // A poisoned lock only means another caller panicked mid-update;
        // entries are whole values, so the map is still usable.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matching() {
        let day = QueryKey::new(["compassView", "2024-01-01"]);
        assert!(day.starts_with(&QueryKey::new(["compassView"])));
        assert!(!day.starts_with(&QueryKey::new(["users"])));
        assert!(!QueryKey::new(["compass"]).starts_with(&QueryKey::new(["compassView"])));
    }

    #[test]
    fn display_joins_segments() {
        assert_eq!(QueryKey::new(["users", "all"]).to_string(), "users:all");
    }
}
