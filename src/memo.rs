use crate::handles::Cache;

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

/// Function-memoization sugar over a [`Cache`].
///
/// Wraps a pure function, deriving the cache key directly from the argument
/// and delegating to the cache's public `get`/`set` contract. The wrapped
/// function is invoked only on a miss.
pub struct Memoized<K, V, F> {
  cache: Cache<K, V>,
  func: F,
  ttl: Option<Duration>,
}

impl<K, V, F> Memoized<K, V, F>
where
  K: Eq + Hash + Clone + Send + 'static,
  V: Send + Sync + 'static,
  F: Fn(&K) -> V,
{
  /// Wraps `func` with memoization through `cache`. Results inherit the
  /// cache's default TTL.
  pub fn new(cache: Cache<K, V>, func: F) -> Self {
    Self {
      cache,
      func,
      ttl: None,
    }
  }

  /// Like [`Memoized::new`], but stores results with an explicit TTL.
  pub fn with_ttl(cache: Cache<K, V>, func: F, ttl: Duration) -> Self {
    Self {
      cache,
      func,
      ttl: Some(ttl),
    }
  }

  /// Returns the cached result for `arg`, computing and storing it on a
  /// miss.
  pub fn call(&self, arg: K) -> Arc<V> {
    if let Some(value) = self.cache.get(&arg) {
      return value;
    }

    let computed = (self.func)(&arg);
    // A zero TTL fails set; fall through to the recompute below then.
    let _ = self.cache.set(arg.clone(), computed, self.ttl);

    // Re-read rather than assume: a racing eviction may already have
    // dropped the fresh entry.
    self
      .cache
      .get(&arg)
      .unwrap_or_else(|| Arc::new((self.func)(&arg)))
  }

  /// The cache backing this wrapper.
  pub fn cache(&self) -> &Cache<K, V> {
    &self.cache
  }
}
