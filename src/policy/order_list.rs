use std::{collections::HashMap, hash::Hash};

use generational_arena::{Arena, Index};

#[derive(Debug)]
struct Node<K> {
  key: K,
  next: Option<Index>,
  prev: Option<Index>,
}

/// A self-contained O(1) ordered key list shared by the built-in policies.
///
/// The head is the most-recently relevant key, the tail the next eviction
/// victim. Nodes live in an arena so that moving a key never reallocates
/// or shifts its neighbors.
#[derive(Debug)]
pub(super) struct OrderList<K: Eq + Hash + Clone> {
  // Arena stores all nodes contiguously.
  nodes: Arena<Node<K>>,
  // HashMap for O(1) lookup of a key to its node index in the arena.
  lookup: HashMap<K, Index>,
  head: Option<Index>,
  tail: Option<Index>,
}

impl<K: Eq + Hash + Clone> OrderList<K> {
  pub fn new() -> Self {
    Self {
      nodes: Arena::new(),
      lookup: HashMap::new(),
      head: None,
      tail: None,
    }
  }

  // Helper to unlink a node from the list. Does not touch the arena or map.
  fn unlink(&mut self, index: Index) {
    let node = &self.nodes[index];
    let prev_node_idx = node.prev;
    let next_node_idx = node.next;

    if let Some(prev_idx) = prev_node_idx {
      self.nodes[prev_idx].next = next_node_idx;
    } else {
      // We are unlinking the head of the list.
      self.head = next_node_idx;
    }

    if let Some(next_idx) = next_node_idx {
      self.nodes[next_idx].prev = prev_node_idx;
    } else {
      // We are unlinking the tail of the list.
      self.tail = prev_node_idx;
    }
  }

  // Helper to make an already-stored node the new head.
  fn push_front_node(&mut self, index: Index) {
    let old_head_idx = self.head;
    self.nodes[index].next = old_head_idx;
    self.nodes[index].prev = None;
    self.head = Some(index);

    if let Some(old_head) = old_head_idx {
      self.nodes[old_head].prev = Some(index);
    }

    if self.tail.is_none() {
      self.tail = Some(index);
    }
  }

  pub fn contains(&self, key: &K) -> bool {
    self.lookup.contains_key(key)
  }

  pub fn is_empty(&self) -> bool {
    self.lookup.is_empty()
  }

  /// Inserts `key` at the front, or moves it there if already present.
  pub fn push_front(&mut self, key: K) {
    if self.lookup.contains_key(&key) {
      self.move_to_front(&key);
    } else {
      let new_node = Node {
        key: key.clone(),
        next: None,
        prev: None,
      };
      let index = self.nodes.insert(new_node);
      self.lookup.insert(key, index);
      self.push_front_node(index);
    }
  }

  pub fn move_to_front(&mut self, key: &K) {
    if let Some(&index) = self.lookup.get(key) {
      // Only move if it's not already the head.
      if self.head != Some(index) {
        self.unlink(index);
        self.push_front_node(index);
      }
    }
  }

  /// Returns the tail key without removing it.
  pub fn peek_back(&self) -> Option<K> {
    self.tail.map(|index| self.nodes[index].key.clone())
  }

  pub fn remove(&mut self, key: &K) -> bool {
    if let Some(index) = self.lookup.remove(key) {
      self.unlink(index);
      self.nodes.remove(index);
      true
    } else {
      false
    }
  }

  pub fn clear(&mut self) {
    self.nodes.clear();
    self.lookup.clear();
    self.head = None;
    self.tail = None;
  }

  // A helper for tests, to get the order of keys from head to tail.
  #[cfg(test)]
  pub(crate) fn keys_as_vec(&self) -> Vec<K> {
    let mut keys = Vec::new();
    let mut current = self.head;
    while let Some(index) = current {
      keys.push(self.nodes[index].key.clone());
      current = self.nodes[index].next;
    }
    keys
  }
}
