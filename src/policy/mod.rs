pub mod fifo;
pub mod lfu;
pub mod lru;
mod order_list;

pub use fifo::Fifo;
pub use lfu::Lfu;
pub use lru::Lru;

/// A trait for implementing cache eviction policies.
///
/// The policy keeps auxiliary ordering state over exactly the same key set
/// as the entry store and decides which key to evict when the cache is over
/// capacity. All methods are called with the cache guard held, so
/// implementations need no locking of their own and take `&mut self`.
///
/// Implementations must be deterministic: `select_victim` is read-only and
/// repeated calls on unchanged state must return the same key, with
/// insertion order as the tiebreak between equally eligible keys.
pub trait EvictionPolicy<K>: Send {
  /// Called when a key is inserted or replaced. The policy should register
  /// the key as the most recently relevant.
  fn on_insert(&mut self, key: &K);

  /// Called when a key is successfully read. Recency-based policies move
  /// the key to the most-recent end; others may ignore this.
  fn on_access(&mut self, key: &K);

  /// Called when a key leaves the store for any reason (delete, eviction,
  /// or expiration). The policy must drop all bookkeeping for it.
  fn on_remove(&mut self, key: &K);

  /// Returns the key to evict next, or `None` if the policy tracks nothing.
  fn select_victim(&self) -> Option<K>;

  /// Clears all state from the policy.
  fn clear(&mut self);
}

impl<K> std::fmt::Debug for dyn EvictionPolicy<K> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("EvictionPolicy")
  }
}
