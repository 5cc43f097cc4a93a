pub mod backend;
pub mod serializer;

use crate::entry::CacheEntry;
use crate::error::PersistenceError;
use crate::handles::Cache;
use crate::time;

use std::hash::Hash;
use std::path::Path;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use self::backend::StorageBackend;
use self::serializer::Serializer;

/// A serializable representation of a single live cache entry.
///
/// Timestamps are wall-clock durations since `UNIX_EPOCH` so that an image
/// stays meaningful across process restarts: time elapsing between save and
/// load counts against an entry's TTL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry<K, V> {
  pub key: K,
  pub value: V,
  pub created_at: Duration,
  pub expires_at: Option<Duration>,
}

/// A serializable, point-in-time snapshot of the cache's live entries.
///
/// Produced by [`Cache::export_image`] and consumed by
/// [`Cache::import_image`]; any `Serializer` implementation can turn it
/// into bytes for a `StorageBackend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheImage<K, V> {
  pub(crate) entries: Vec<ImageEntry<K, V>>,
  pub(crate) max_size: usize,
}

impl<K, V> CacheImage<K, V> {
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn entries(&self) -> &[ImageEntry<K, V>] {
    &self.entries
  }
}

impl<K, V> Cache<K, V>
where
  K: Eq + Hash + Clone + Send + 'static,
  V: Clone + Send + Sync + 'static,
{
  /// Creates an image of every live entry under a single guard acquisition.
  ///
  /// Dead entries are skipped, not resurrected. The cache itself is not
  /// modified; this is a read-only export.
  pub fn export_image(&self) -> CacheImage<K, V> {
    let now = time::now_duration();
    let wall_now = time::wall_now();

    let core = self.shared.core.lock();
    let mut entries = Vec::with_capacity(core.store.len());

    for (key, entry) in core.store.iter() {
      if entry.is_expired(now) {
        continue;
      }

      // Translate monotonic timestamps onto the wall clock.
      let age = now.saturating_sub(entry.created_at);
      let created_at = wall_now.saturating_sub(age);
      let expires_at = entry
        .expires_at
        .map(|deadline| wall_now.saturating_add(deadline.saturating_sub(now)));

      entries.push(ImageEntry {
        key: key.clone(),
        value: entry.value.as_ref().clone(),
        created_at,
        expires_at,
      });
    }

    CacheImage {
      entries,
      max_size: self.max_size(),
    }
  }

  /// Replaces the cache's contents with the image's entries.
  ///
  /// Entries whose wall-clock expiry has already passed are dropped. The
  /// survivors are re-registered with the policy in the image's stored
  /// order, and anything beyond capacity is evicted per normal policy
  /// rules. Returns the number of entries that made it in.
  pub fn import_image(&self, image: CacheImage<K, V>) -> usize {
    let now = time::now_duration();
    let wall_now = time::wall_now();

    let mut core = self.shared.core.lock();
    core.clear();

    let mut loaded = 0;
    for image_entry in image.entries {
      let expires_at = match image_entry.expires_at {
        Some(wall_deadline) => {
          if wall_deadline <= wall_now {
            continue;
          }
          Some(now.saturating_add(wall_deadline - wall_now))
        }
        None => None,
      };

      let age = wall_now.saturating_sub(image_entry.created_at);
      let created_at = now.saturating_sub(age);

      let entry = CacheEntry::from_parts(image_entry.value, created_at, expires_at, now);
      core.store.insert(image_entry.key.clone(), entry);
      core.policy.on_insert(&image_entry.key);
      loaded += 1;
    }

    core.enforce_capacity(self.shared.max_size, now, &self.shared.metrics);
    loaded
  }

  /// Saves a snapshot of the cache to durable storage.
  ///
  /// The image is materialized under the guard, but the serializer and
  /// backend run with the guard released, so persistence I/O never blocks
  /// cache operations. On failure the cache state is unaffected.
  pub fn save_to_disk<P: AsRef<Path>>(
    &self,
    path: P,
    serializer: &dyn Serializer<K, V>,
    backend: &dyn StorageBackend,
  ) -> Result<(), PersistenceError> {
    let image = self.export_image();
    let bytes = serializer.encode(&image)?;
    backend.write(path.as_ref(), &bytes)?;
    debug!(
      "saved {} cache entries to {}",
      image.len(),
      path.as_ref().display()
    );
    Ok(())
  }

  /// Loads a snapshot from durable storage, replacing current contents.
  ///
  /// Read and decode run with the guard released; only the final import
  /// acquires it. A failure at any step leaves the cache unchanged.
  /// Returns the number of entries loaded.
  pub fn load_from_disk<P: AsRef<Path>>(
    &self,
    path: P,
    serializer: &dyn Serializer<K, V>,
    backend: &dyn StorageBackend,
  ) -> Result<usize, PersistenceError> {
    let bytes = backend.read(path.as_ref())?;
    let image = serializer.decode(&bytes)?;
    let loaded = self.import_image(image);
    debug!(
      "loaded {} cache entries from {}",
      loaded,
      path.as_ref().display()
    );
    Ok(loaded)
  }
}
