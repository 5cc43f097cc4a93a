use crate::error::BuildError;
use crate::handles::Cache;
use crate::metrics::Metrics;
use crate::policy::{EvictionPolicy, Lru};
use crate::registry::Registry;
use crate::shared::{CacheCore, CacheShared};
use crate::task::janitor::Janitor;

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

const DEFAULT_MAX_SIZE: usize = 1024;
const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(1);

/// A builder for creating `Cache` instances.
pub struct CacheBuilder<K, V> {
  max_size: usize,
  default_ttl: Option<Duration>,
  cleanup_interval: Duration,
  enable_metrics: bool,
  policy: Option<Box<dyn EvictionPolicy<K>>>,
  _value_marker: PhantomData<V>,
}

impl<K, V> fmt::Debug for CacheBuilder<K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CacheBuilder")
      .field("max_size", &self.max_size)
      .field("default_ttl", &self.default_ttl)
      .field("cleanup_interval", &self.cleanup_interval)
      .field("enable_metrics", &self.enable_metrics)
      .field("has_policy", &self.policy.is_some())
      .finish()
  }
}

impl<K, V> CacheBuilder<K, V> {
  /// Creates a new `CacheBuilder` with default settings.
  pub fn new() -> Self {
    Self {
      max_size: DEFAULT_MAX_SIZE,
      default_ttl: None,
      cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
      enable_metrics: true,
      policy: None,
      _value_marker: PhantomData,
    }
  }

  /// Sets the maximum number of live entries the cache may hold.
  pub fn max_size(mut self, max_size: usize) -> Self {
    self.max_size = max_size;
    self
  }

  /// Sets a default TTL applied to entries inserted without an explicit one.
  pub fn default_ttl(mut self, ttl: Duration) -> Self {
    self.default_ttl = Some(ttl);
    self
  }

  /// Sets the tick interval of the background cleanup task.
  pub fn cleanup_interval(mut self, interval: Duration) -> Self {
    self.cleanup_interval = interval;
    self
  }

  /// Enables or disables metrics collection. When disabled, counter
  /// increments become no-ops; cache semantics are unchanged.
  pub fn enable_metrics(mut self, enabled: bool) -> Self {
    self.enable_metrics = enabled;
    self
  }

  /// Sets a custom eviction policy for the cache.
  ///
  /// By default, the cache uses an `Lru` policy.
  pub fn policy<P>(mut self, policy: P) -> Self
  where
    P: EvictionPolicy<K> + 'static,
  {
    self.policy = Some(Box::new(policy));
    self
  }

  /// Resolves an eviction policy by name through a registry.
  ///
  /// Resolution happens immediately: an unregistered name aborts this
  /// configuration attempt with `BuildError::UnknownPolicy` and affects no
  /// running cache.
  pub fn policy_name(mut self, registry: &Registry<K, V>, name: &str) -> Result<Self, BuildError> {
    match registry.policy(name) {
      Ok(policy) => {
        self.policy = Some(policy);
        Ok(self)
      }
      Err(_) => Err(BuildError::UnknownPolicy(name.to_string())),
    }
  }

  /// Validates the builder configuration.
  fn validate(&self) -> Result<(), BuildError> {
    if self.max_size == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    if self.cleanup_interval.is_zero() {
      return Err(BuildError::ZeroCleanupInterval);
    }
    // A zero default TTL would make every entry dead on arrival; `set`
    // already rejects an explicit zero TTL for the same reason.
    if self.default_ttl.is_some_and(|ttl| ttl.is_zero()) {
      return Err(BuildError::ZeroDefaultTtl);
    }
    Ok(())
  }
}

impl<K, V> CacheBuilder<K, V>
where
  K: Eq + Hash + Clone + Send + 'static,
  V: Send + Sync + 'static,
{
  /// Builds the cache and starts its background cleanup task.
  pub fn build(mut self) -> Result<Cache<K, V>, BuildError> {
    self.validate()?;

    let policy = self
      .policy
      .take()
      .unwrap_or_else(|| Box::new(Lru::new()));

    let core = Arc::new(Mutex::new(CacheCore::new(policy)));
    let metrics = Arc::new(Metrics::new(self.enable_metrics));

    let janitor = Janitor::spawn(
      Arc::clone(&core),
      Arc::clone(&metrics),
      self.cleanup_interval,
    );

    Ok(Cache {
      shared: Arc::new(CacheShared {
        core,
        metrics,
        max_size: self.max_size,
        default_ttl: self.default_ttl,
        cleanup_interval: self.cleanup_interval,
        janitor: Some(janitor),
      }),
    })
  }
}

impl<K, V> Default for CacheBuilder<K, V> {
  fn default() -> Self {
    Self::new()
  }
}
