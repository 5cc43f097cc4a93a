use super::order_list::OrderList;
use super::EvictionPolicy;

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// An eviction policy that evicts the least frequently used key.
///
/// Frequency is incremented on insert, replace, and access. Ties are broken
/// by recency: among keys with the lowest frequency, the least recently
/// touched one is evicted.
#[derive(Debug)]
pub struct Lfu<K: Eq + Hash + Clone> {
  // Key -> access frequency.
  freq: HashMap<K, u64>,
  // Frequency -> keys at that frequency, in recency order. The BTreeMap
  // keeps the lowest occupied frequency at the front.
  buckets: BTreeMap<u64, OrderList<K>>,
}

impl<K: Eq + Hash + Clone> Lfu<K> {
  pub fn new() -> Self {
    Self {
      freq: HashMap::new(),
      buckets: BTreeMap::new(),
    }
  }

  // Moves a tracked key into the next-higher frequency bucket.
  fn bump(&mut self, key: &K) {
    let Some(freq) = self.freq.get_mut(key) else {
      return;
    };
    let old = *freq;
    *freq += 1;
    let new = old + 1;

    if let Some(bucket) = self.buckets.get_mut(&old) {
      bucket.remove(key);
      if bucket.is_empty() {
        self.buckets.remove(&old);
      }
    }
    self
      .buckets
      .entry(new)
      .or_insert_with(OrderList::new)
      .push_front(key.clone());
  }
}

impl<K: Eq + Hash + Clone> Default for Lfu<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K> EvictionPolicy<K> for Lfu<K>
where
  K: Eq + Hash + Clone + Send,
{
  /// A brand-new key starts at frequency one; replacing an existing key
  /// counts as a use and bumps its frequency instead.
  fn on_insert(&mut self, key: &K) {
    if self.freq.contains_key(key) {
      self.bump(key);
    } else {
      self.freq.insert(key.clone(), 1);
      self
        .buckets
        .entry(1)
        .or_insert_with(OrderList::new)
        .push_front(key.clone());
    }
  }

  fn on_access(&mut self, key: &K) {
    self.bump(key);
  }

  fn on_remove(&mut self, key: &K) {
    if let Some(freq) = self.freq.remove(key) {
      if let Some(bucket) = self.buckets.get_mut(&freq) {
        bucket.remove(key);
        if bucket.is_empty() {
          self.buckets.remove(&freq);
        }
      }
    }
  }

  /// The least recently touched key in the lowest occupied frequency
  /// bucket is the victim.
  fn select_victim(&self) -> Option<K> {
    self
      .buckets
      .values()
      .next()
      .and_then(|bucket| bucket.peek_back())
  }

  fn clear(&mut self) {
    self.freq.clear();
    self.buckets.clear();
  }
}
