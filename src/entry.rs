use std::sync::Arc;
use std::time::Duration;

/// A container for a value in the cache, holding all necessary metadata.
///
/// Entries are owned exclusively by the store and only ever touched while
/// the cache guard is held, so all fields are plain data.
#[derive(Debug)]
pub(crate) struct CacheEntry<V> {
  /// The user's value, wrapped in an Arc for shared ownership.
  pub(crate) value: Arc<V>,
  /// When the entry was inserted, as a duration since the cache epoch.
  pub(crate) created_at: Duration,
  /// The expiration instant. `None` means the entry never expires.
  pub(crate) expires_at: Option<Duration>,
  /// The last successful read or write of this entry.
  pub(crate) last_accessed: Duration,
  /// How many times this entry has been read or written.
  pub(crate) access_count: u64,
}

impl<V> CacheEntry<V> {
  /// Creates a new `CacheEntry` inserted at `now` with an optional TTL.
  pub(crate) fn new(value: V, ttl: Option<Duration>, now: Duration) -> Self {
    Self {
      value: Arc::new(value),
      created_at: now,
      // Saturates so that an absurd TTL clamps to "effectively never"
      // instead of panicking on overflow.
      expires_at: ttl.map(|d| now.saturating_add(d)),
      last_accessed: now,
      access_count: 0,
    }
  }

  /// Reconstructs an entry from a persistence image.
  ///
  /// `expires_at` must already be translated into the cache's monotonic
  /// timeline and must not lie in the past.
  pub(crate) fn from_parts(value: V, created_at: Duration, expires_at: Option<Duration>, now: Duration) -> Self {
    Self {
      value: Arc::new(value),
      created_at,
      expires_at,
      last_accessed: now,
      access_count: 0,
    }
  }

  /// Returns a clone of the `Arc` containing the value.
  #[inline]
  pub(crate) fn value(&self) -> Arc<V> {
    self.value.clone()
  }

  /// Checks whether the entry is past its expiration instant.
  #[inline]
  pub(crate) fn is_expired(&self, now: Duration) -> bool {
    match self.expires_at {
      Some(expires_at) => now >= expires_at,
      None => false,
    }
  }

  /// Records a successful access at `now`.
  #[inline]
  pub(crate) fn touch(&mut self, now: Duration) {
    self.last_accessed = now;
    self.access_count += 1;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn entry_without_ttl_never_expires() {
    let entry = CacheEntry::new("v", None, Duration::from_secs(5));
    assert!(!entry.is_expired(Duration::from_secs(1_000_000)));
  }

  #[test]
  fn entry_expires_at_deadline() {
    let now = Duration::from_secs(10);
    let entry = CacheEntry::new("v", Some(Duration::from_secs(5)), now);
    assert!(!entry.is_expired(Duration::from_secs(14)));
    assert!(entry.is_expired(Duration::from_secs(15)));
  }

  #[test]
  fn extreme_ttl_saturates_instead_of_panicking() {
    let entry = CacheEntry::new("v", Some(Duration::MAX), Duration::from_secs(100));
    assert_eq!(entry.expires_at, Some(Duration::MAX));
    assert!(!entry.is_expired(Duration::from_secs(1_000_000)));
  }

  #[test]
  fn touch_updates_access_metadata() {
    let mut entry = CacheEntry::new("v", None, Duration::from_secs(1));
    entry.touch(Duration::from_secs(2));
    entry.touch(Duration::from_secs(3));
    assert_eq!(entry.access_count, 2);
    assert_eq!(entry.last_accessed, Duration::from_secs(3));
  }
}
