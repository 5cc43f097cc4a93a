use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crossbeam_utils::CachePadded;

/// A thread-safe, internal metrics collector for the cache.
///
/// All counters are atomic so that the orchestration path and the cleanup
/// path can record events concurrently without touching the cache guard.
/// When the collector is disabled every recording call is a no-op; cache
/// semantics are unchanged.
#[derive(Debug)]
pub(crate) struct Metrics {
  enabled: bool,

  pub(crate) hits: CachePadded<AtomicU64>,
  pub(crate) misses: CachePadded<AtomicU64>,
  pub(crate) sets: CachePadded<AtomicU64>,
  pub(crate) deletes: CachePadded<AtomicU64>,
  pub(crate) evictions: CachePadded<AtomicU64>,
  pub(crate) expirations: CachePadded<AtomicU64>,

  created_at: Instant,
}

impl Metrics {
  pub(crate) fn new(enabled: bool) -> Self {
    Self {
      enabled,
      hits: CachePadded::new(AtomicU64::new(0)),
      misses: CachePadded::new(AtomicU64::new(0)),
      sets: CachePadded::new(AtomicU64::new(0)),
      deletes: CachePadded::new(AtomicU64::new(0)),
      evictions: CachePadded::new(AtomicU64::new(0)),
      expirations: CachePadded::new(AtomicU64::new(0)),
      created_at: Instant::now(),
    }
  }

  #[inline]
  fn bump(&self, counter: &AtomicU64) {
    if self.enabled {
      counter.fetch_add(1, Ordering::Relaxed);
    }
  }

  #[inline]
  pub(crate) fn record_hit(&self) {
    self.bump(&self.hits);
  }

  #[inline]
  pub(crate) fn record_miss(&self) {
    self.bump(&self.misses);
  }

  #[inline]
  pub(crate) fn record_set(&self) {
    self.bump(&self.sets);
  }

  #[inline]
  pub(crate) fn record_delete(&self) {
    self.bump(&self.deletes);
  }

  #[inline]
  pub(crate) fn record_eviction(&self) {
    self.bump(&self.evictions);
  }

  #[inline]
  pub(crate) fn record_expiration(&self) {
    self.bump(&self.expirations);
  }

  /// Creates a point-in-time snapshot of the current metrics.
  ///
  /// Each counter is read independently; the snapshot is not a linearizable
  /// read across all six, which is fine for operational visibility.
  pub(crate) fn snapshot(&self, current_size: usize) -> MetricsSnapshot {
    let hits = self.hits.load(Ordering::Relaxed);
    let misses = self.misses.load(Ordering::Relaxed);
    let total_lookups = hits + misses;

    MetricsSnapshot {
      hits,
      misses,
      hit_ratio: if total_lookups == 0 {
        0.0
      } else {
        hits as f64 / total_lookups as f64
      },
      sets: self.sets.load(Ordering::Relaxed),
      deletes: self.deletes.load(Ordering::Relaxed),
      evictions: self.evictions.load(Ordering::Relaxed),
      expirations: self.expirations.load(Ordering::Relaxed),
      current_size,
      uptime_secs: self.created_at.elapsed().as_secs(),
    }
  }
}

/// A point-in-time, public-facing snapshot of the cache's metrics.
#[derive(Clone)]
pub struct MetricsSnapshot {
  /// The number of successful lookups.
  pub hits: u64,
  /// The number of failed lookups (absent or expired).
  pub misses: u64,
  /// The cache hit ratio (hits / (hits + misses)).
  pub hit_ratio: f64,
  /// The total number of `set` calls.
  pub sets: u64,
  /// The total number of explicit deletions that removed an entry.
  pub deletes: u64,
  /// The number of entries evicted to satisfy the capacity bound.
  pub evictions: u64,
  /// The number of entries removed because their TTL elapsed.
  pub expirations: u64,
  /// The number of live entries at snapshot time.
  pub current_size: usize,
  /// The number of seconds the cache has been running.
  pub uptime_secs: u64,
}

impl fmt::Debug for MetricsSnapshot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MetricsSnapshot")
      .field("hits", &self.hits)
      .field("misses", &self.misses)
      .field("hit_ratio", &format!("{:.2}%", self.hit_ratio * 100.0))
      .field("sets", &self.sets)
      .field("deletes", &self.deletes)
      .field("evictions", &self.evictions)
      .field("expirations", &self.expirations)
      .field("current_size", &self.current_size)
      .field("uptime_secs", &self.uptime_secs)
      .finish()
  }
}
