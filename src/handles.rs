use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::metrics::MetricsSnapshot;
use crate::shared::CacheShared;
use crate::time;

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

/// A thread-safe, in-memory key-value cache with TTL expiration and a
/// pluggable eviction policy.
///
/// All mutation of the store and the policy is serialized by one guard,
/// acquired exactly once per public operation. Operations on the same key
/// from different threads are therefore totally ordered by guard
/// acquisition. Share a cache between threads by wrapping it in an `Arc`.
#[derive(Debug)]
pub struct Cache<K, V> {
  pub(crate) shared: Arc<CacheShared<K, V>>,
}

impl<K, V> Cache<K, V>
where
  K: Eq + Hash + Clone + Send + 'static,
  V: Send + Sync + 'static,
{
  /// Retrieves a value from the cache.
  ///
  /// Returns a clone of the `Arc` containing the value if the key is
  /// present and live. An entry found dead is removed on the spot and
  /// reported as a miss plus an expiration; absence is a plain miss.
  pub fn get(&self, key: &K) -> Option<Arc<V>> {
    let now = time::now_duration();
    let mut core = self.shared.core.lock();

    // `None` here means the entry exists but is dead.
    let live_value = match core.store.lookup_mut(key) {
      None => {
        self.shared.metrics.record_miss();
        return None;
      }
      Some(entry) => {
        if entry.is_expired(now) {
          None
        } else {
          entry.touch(now);
          Some(entry.value())
        }
      }
    };

    match live_value {
      Some(value) => {
        core.policy.on_access(key);
        self.shared.metrics.record_hit();
        Some(value)
      }
      None => {
        // Lazy removal: a dead entry must never survive being observed.
        core.store.remove(key);
        core.policy.on_remove(key);
        self.shared.metrics.record_expiration();
        self.shared.metrics.record_miss();
        None
      }
    }
  }

  /// Inserts or replaces a key-value pair.
  ///
  /// `ttl` overrides the configured default TTL for this entry; `None`
  /// falls back to the default, and an entry only lives forever when both
  /// are absent. If the insert pushes the store over capacity, expired
  /// entries are swept and then policy-selected victims are evicted until
  /// the bound holds again.
  pub fn set(&self, key: K, value: V, ttl: Option<Duration>) -> Result<(), CacheError> {
    if ttl.is_some_and(|d| d.is_zero()) {
      return Err(CacheError::InvalidTtl);
    }
    let effective_ttl = ttl.or(self.shared.default_ttl);
    let now = time::now_duration();

    let mut core = self.shared.core.lock();
    core.store.insert(key.clone(), CacheEntry::new(value, effective_ttl, now));
    core.policy.on_insert(&key);
    self.shared.metrics.record_set();

    core.enforce_capacity(self.shared.max_size, now, &self.shared.metrics);
    Ok(())
  }

  /// Removes an entry, live or dead. Returns whether a removal occurred.
  pub fn delete(&self, key: &K) -> bool {
    let mut core = self.shared.core.lock();

    if core.store.remove(key).is_some() {
      core.policy.on_remove(key);
      self.shared.metrics.record_delete();
      true
    } else {
      false
    }
  }

  /// Returns whether a live entry exists for `key`.
  ///
  /// This is a pure existence probe: it does not count as a hit or a miss,
  /// does not refresh recency, and leaves a dead entry for the sweeper.
  pub fn contains(&self, key: &K) -> bool {
    let now = time::now_duration();
    let core = self.shared.core.lock();
    core
      .store
      .lookup(key)
      .map_or(false, |entry| !entry.is_expired(now))
  }

  /// The number of live entries.
  pub fn len(&self) -> usize {
    let now = time::now_duration();
    self.shared.core.lock().live_len(now)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Removes all entries and resets the policy's bookkeeping.
  pub fn clear(&self) {
    self.shared.core.lock().clear();
  }

  /// Creates a point-in-time snapshot of the cache's metrics.
  pub fn metrics(&self) -> MetricsSnapshot {
    let current_size = self.len();
    self.shared.metrics.snapshot(current_size)
  }

  /// The configured capacity bound.
  pub fn max_size(&self) -> usize {
    self.shared.max_size
  }

  /// The configured default TTL, if any.
  pub fn default_ttl(&self) -> Option<Duration> {
    self.shared.default_ttl
  }
}
