use super::order_list::OrderList;
use super::EvictionPolicy;

use std::hash::Hash;

/// An eviction policy that evicts the least recently used key.
///
/// Keys are kept in strict recency order. Inserts and accesses move the key
/// to the most-recent end in O(1); the victim is the least-recent end.
#[derive(Debug)]
pub struct Lru<K: Eq + Hash + Clone> {
  list: OrderList<K>,
}

impl<K: Eq + Hash + Clone> Lru<K> {
  pub fn new() -> Self {
    Self {
      list: OrderList::new(),
    }
  }
}

impl<K: Eq + Hash + Clone> Default for Lru<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K> EvictionPolicy<K> for Lru<K>
where
  K: Eq + Hash + Clone + Send,
{
  /// A new or replaced key is the most recently used.
  fn on_insert(&mut self, key: &K) {
    self.list.push_front(key.clone());
  }

  /// An accessed key moves to the most-recent end.
  fn on_access(&mut self, key: &K) {
    self.list.move_to_front(key);
  }

  fn on_remove(&mut self, key: &K) {
    self.list.remove(key);
  }

  /// The least recently used key is the victim.
  fn select_victim(&self) -> Option<K> {
    self.list.peek_back()
  }

  fn clear(&mut self) {
    self.list.clear();
  }
}
