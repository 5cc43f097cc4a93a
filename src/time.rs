use once_cell::sync::Lazy;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

// The single, static reference point for all time calculations in the cache.
// It is initialized lazily on its first use.
static CACHE_EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// A helper to get the current time as a `Duration` since the epoch.
#[inline]
pub(crate) fn now_duration() -> Duration {
  Instant::now().saturating_duration_since(*CACHE_EPOCH)
}

/// The current wall-clock time as a `Duration` since `UNIX_EPOCH`.
///
/// The monotonic epoch above is only meaningful within one process, so the
/// persistence image records wall-clock timestamps instead.
#[inline]
pub(crate) fn wall_now() -> Duration {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .unwrap_or_default()
}
