use crate::entry::CacheEntry;

use std::collections::HashMap;
use std::hash::Hash;

/// The key-to-entry map at the heart of the cache.
///
/// The store performs no locking of its own. It is the unit of mutual
/// exclusion, not a self-synchronizing object: every call requires the
/// caller to hold the cache's guard, which the surrounding `Mutex` in
/// `CacheCore` enforces structurally.
#[derive(Debug)]
pub(crate) struct EntryStore<K, V> {
  entries: HashMap<K, CacheEntry<V>, ahash::RandomState>,
}

impl<K, V> EntryStore<K, V>
where
  K: Eq + Hash,
{
  pub(crate) fn new() -> Self {
    Self {
      entries: HashMap::default(),
    }
  }

  /// Looks a key up without any side effect on liveness or recency.
  #[inline]
  pub(crate) fn lookup(&self, key: &K) -> Option<&CacheEntry<V>> {
    self.entries.get(key)
  }

  #[inline]
  pub(crate) fn lookup_mut(&mut self, key: &K) -> Option<&mut CacheEntry<V>> {
    self.entries.get_mut(key)
  }

  /// Inserts or replaces an entry, returning the previous one if any.
  #[inline]
  pub(crate) fn insert(&mut self, key: K, entry: CacheEntry<V>) -> Option<CacheEntry<V>> {
    self.entries.insert(key, entry)
  }

  #[inline]
  pub(crate) fn remove(&mut self, key: &K) -> Option<CacheEntry<V>> {
    self.entries.remove(key)
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &CacheEntry<V>)> {
    self.entries.iter()
  }

  /// The number of physically held entries. This may include entries that
  /// are already dead but not yet swept; callers must liveness-check.
  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }

  pub(crate) fn clear(&mut self) {
    self.entries.clear();
  }
}
