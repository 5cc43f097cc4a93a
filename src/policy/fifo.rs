use super::order_list::OrderList;
use super::EvictionPolicy;

use std::hash::Hash;

/// An eviction policy that evicts keys in First-In, First-Out order.
///
/// The order is fixed at insertion and never changed by access.
#[derive(Debug)]
pub struct Fifo<K: Eq + Hash + Clone> {
  list: OrderList<K>,
}

impl<K: Eq + Hash + Clone> Fifo<K> {
  pub fn new() -> Self {
    Self {
      list: OrderList::new(),
    }
  }
}

impl<K: Eq + Hash + Clone> Default for Fifo<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K> EvictionPolicy<K> for Fifo<K>
where
  K: Eq + Hash + Clone + Send,
{
  /// On insert, add the new key to the front of the queue.
  ///
  /// If the key already exists its position is kept. This preserves the
  /// "First-In" part of the name across value replacements.
  fn on_insert(&mut self, key: &K) {
    if !self.list.contains(key) {
      self.list.push_front(key.clone());
    }
  }

  /// A FIFO policy does not care about access patterns. This is a no-op.
  fn on_access(&mut self, _key: &K) {}

  fn on_remove(&mut self, key: &K) {
    self.list.remove(key);
  }

  /// The oldest inserted key is the victim.
  fn select_victim(&self) -> Option<K> {
    self.list.peek_back()
  }

  fn clear(&mut self) {
    self.list.clear();
  }
}
