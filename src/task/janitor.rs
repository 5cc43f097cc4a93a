use crate::metrics::Metrics;
use crate::shared::CacheCore;
use crate::time;

use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;
use parking_lot::Mutex;

/// The background task responsible for sweeping expired entries.
///
/// The janitor serializes with ordinary cache operations through the same
/// guard, so a sweep can never observe the store and policy out of sync and
/// two sweeps can never overlap.
pub(crate) struct Janitor {
  // Keeping the handle ties the thread's lifetime to the cache.
  _handle: JoinHandle<()>,
  stop_flag: Arc<AtomicBool>,
}

impl Janitor {
  /// Spawns a new janitor thread ticking every `tick_interval`.
  pub(crate) fn spawn<K, V>(
    core: Arc<Mutex<CacheCore<K, V>>>,
    metrics: Arc<Metrics>,
    tick_interval: Duration,
  ) -> Self
  where
    K: Eq + Hash + Clone + Send + 'static,
    V: Send + Sync + 'static,
  {
    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_clone = stop_flag.clone();

    let handle = thread::spawn(move || {
      while !stop_clone.load(Ordering::Relaxed) {
        let sleep_start = std::time::Instant::now();

        // A tick that finds nothing expired is a no-op but still runs.
        let removed = {
          let mut guard = core.lock();
          guard.sweep_expired(time::now_duration(), &metrics)
        };
        if removed > 0 {
          debug!("janitor tick removed {} expired entries", removed);
        }

        // Sleep for the remaining duration of the tick interval. The stop
        // flag is honored at the next tick boundary, never mid-sweep.
        if let Some(remaining) = tick_interval.checked_sub(sleep_start.elapsed()) {
          thread::sleep(remaining);
        }
      }
    });

    Self {
      _handle: handle,
      stop_flag,
    }
  }

  /// Signals the janitor thread to stop at its next tick boundary.
  pub(crate) fn stop(self) {
    self.stop_flag.store(true, Ordering::Relaxed);
  }
}
