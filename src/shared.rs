use crate::metrics::Metrics;
use crate::policy::EvictionPolicy;
use crate::store::EntryStore;
use crate::task::janitor::Janitor;

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// The state protected by the cache's single guard: the entry store and the
/// eviction policy.
///
/// These two structures must track exactly the same key set. Every helper
/// here upholds that invariant by always pairing a store mutation with the
/// matching policy notification before returning.
pub(crate) struct CacheCore<K, V> {
  pub(crate) store: EntryStore<K, V>,
  pub(crate) policy: Box<dyn EvictionPolicy<K>>,
}

impl<K, V> CacheCore<K, V>
where
  K: Eq + Hash + Clone,
{
  pub(crate) fn new(policy: Box<dyn EvictionPolicy<K>>) -> Self {
    Self {
      store: EntryStore::new(),
      policy,
    }
  }

  /// Removes every dead entry, notifying the policy and counting an
  /// expiration per removal. Returns how many entries were removed.
  pub(crate) fn sweep_expired(&mut self, now: Duration, metrics: &Metrics) -> usize {
    let dead: Vec<K> = self
      .store
      .iter()
      .filter(|(_, entry)| entry.is_expired(now))
      .map(|(key, _)| key.clone())
      .collect();

    for key in &dead {
      self.store.remove(key);
      self.policy.on_remove(key);
      metrics.record_expiration();
    }

    dead.len()
  }

  /// Evicts policy-selected victims until the store holds at most
  /// `max_size` entries. Dead entries are swept first so that they never
  /// count against the capacity bound.
  pub(crate) fn enforce_capacity(&mut self, max_size: usize, now: Duration, metrics: &Metrics) {
    if self.store.len() <= max_size {
      return;
    }

    self.sweep_expired(now, metrics);

    while self.store.len() > max_size {
      match self.policy.select_victim() {
        Some(victim) => {
          self.store.remove(&victim);
          self.policy.on_remove(&victim);
          metrics.record_eviction();
        }
        None => break,
      }
    }
  }

  /// The number of live entries right now.
  pub(crate) fn live_len(&self, now: Duration) -> usize {
    self
      .store
      .iter()
      .filter(|(_, entry)| !entry.is_expired(now))
      .count()
  }

  pub(crate) fn clear(&mut self) {
    self.store.clear();
    self.policy.clear();
  }
}

impl<K: Eq + Hash, V> fmt::Debug for CacheCore<K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CacheCore")
      .field("len", &self.store.len())
      .finish_non_exhaustive()
  }
}

/// The internal, thread-safe core of the cache, shared between handles and
/// the janitor.
pub(crate) struct CacheShared<K, V> {
  pub(crate) core: Arc<Mutex<CacheCore<K, V>>>,
  pub(crate) metrics: Arc<Metrics>,
  pub(crate) max_size: usize,
  pub(crate) default_ttl: Option<Duration>,
  pub(crate) cleanup_interval: Duration,
  pub(crate) janitor: Option<Janitor>,
}

impl<K, V> fmt::Debug for CacheShared<K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CacheShared")
      .field("max_size", &self.max_size)
      .field("default_ttl", &self.default_ttl)
      .field("cleanup_interval", &self.cleanup_interval)
      .finish_non_exhaustive()
  }
}

impl<K, V> Drop for CacheShared<K, V> {
  fn drop(&mut self) {
    if let Some(janitor) = self.janitor.take() {
      janitor.stop();
    }
  }
}
