use quickcache::policy::EvictionPolicy;
use quickcache::{BuildError, CacheBuilder, Fifo, Lfu, Lru, Registry};

#[test]
fn test_lru_evicts_least_recently_used() {
  let cache = CacheBuilder::<&str, i32>::new()
    .max_size(2)
    .policy(Lru::new())
    .build()
    .unwrap();

  cache.set("a", 1, None).unwrap();
  cache.set("b", 2, None).unwrap();
  cache.set("c", 3, None).unwrap();

  assert!(cache.get(&"a").is_none(), "'a' was least recent");
  assert_eq!(cache.get(&"b").as_deref(), Some(&2));
  assert_eq!(cache.get(&"c").as_deref(), Some(&3));
}

#[test]
fn test_lru_access_protects_an_entry() {
  let cache = CacheBuilder::<&str, i32>::new()
    .max_size(2)
    .policy(Lru::new())
    .build()
    .unwrap();

  cache.set("a", 1, None).unwrap();
  cache.set("b", 2, None).unwrap();
  cache.get(&"a");
  cache.set("c", 3, None).unwrap();

  assert_eq!(cache.get(&"a").as_deref(), Some(&1), "'a' was just used");
  assert!(cache.get(&"b").is_none(), "'b' became least recent");
}

#[test]
fn test_fifo_ignores_access_order() {
  let cache = CacheBuilder::<&str, i32>::new()
    .max_size(2)
    .policy(Fifo::new())
    .build()
    .unwrap();

  cache.set("a", 1, None).unwrap();
  cache.set("b", 2, None).unwrap();
  // Accessing 'a' must not save it under FIFO.
  cache.get(&"a");
  cache.set("c", 3, None).unwrap();

  assert!(cache.get(&"a").is_none(), "'a' was first in");
  assert_eq!(cache.get(&"b").as_deref(), Some(&2));
  assert_eq!(cache.get(&"c").as_deref(), Some(&3));
}

#[test]
fn test_lfu_evicts_least_frequently_used() {
  let cache = CacheBuilder::<&str, i32>::new()
    .max_size(2)
    .policy(Lfu::new())
    .build()
    .unwrap();

  cache.set("a", 1, None).unwrap();
  cache.set("b", 2, None).unwrap();
  cache.get(&"a");
  cache.get(&"a");
  cache.get(&"b");
  cache.set("c", 3, None).unwrap();

  // 'c' entered at frequency one while 'a' and 'b' were used more.
  assert!(cache.get(&"c").is_none(), "'c' was least frequent");
  assert_eq!(cache.get(&"a").as_deref(), Some(&1));
  assert_eq!(cache.get(&"b").as_deref(), Some(&2));
}

#[test]
fn test_lfu_frequency_tie_breaks_toward_least_recent() {
  let cache = CacheBuilder::<&str, i32>::new()
    .max_size(2)
    .policy(Lfu::new())
    .build()
    .unwrap();

  // 'a' and 'b' are both at frequency one; 'a' is older.
  cache.set("a", 1, None).unwrap();
  cache.set("b", 2, None).unwrap();
  cache.set("c", 3, None).unwrap();

  assert!(cache.get(&"a").is_none(), "'a' lost the recency tiebreak");
  assert_eq!(cache.get(&"b").as_deref(), Some(&2));
  assert_eq!(cache.get(&"c").as_deref(), Some(&3));
}

#[test]
fn test_lfu_resolves_by_name() {
  let registry = Registry::<String, i32>::with_defaults();

  let cache = CacheBuilder::new()
    .max_size(2)
    .policy_name(&registry, "lfu")
    .unwrap()
    .build()
    .unwrap();

  cache.set("hot".to_string(), 1, None).unwrap();
  cache.set("cold".to_string(), 2, None).unwrap();
  cache.get(&"hot".to_string());
  cache.set("new".to_string(), 3, None).unwrap();

  assert!(cache.contains(&"hot".to_string()));
  assert!(cache.get(&"cold".to_string()).is_none());
}

#[test]
fn test_policy_resolved_by_name() {
  let registry = Registry::<String, i32>::with_defaults();

  let cache = CacheBuilder::new()
    .max_size(2)
    .policy_name(&registry, "fifo")
    .unwrap()
    .build()
    .unwrap();

  cache.set("a".to_string(), 1, None).unwrap();
  cache.set("b".to_string(), 2, None).unwrap();
  cache.get(&"a".to_string());
  cache.set("c".to_string(), 3, None).unwrap();

  assert!(cache.get(&"a".to_string()).is_none());
}

#[test]
fn test_unknown_policy_name_fails_construction() {
  let registry = Registry::<String, i32>::with_defaults();
  let result = CacheBuilder::new().policy_name(&registry, "tinylfu");

  assert!(matches!(result, Err(BuildError::UnknownPolicy(name)) if name == "tinylfu"));
}

// A policy that always evicts the largest key, registered by name.
struct EvictLargest {
  keys: std::collections::BTreeSet<u32>,
}

impl EvictionPolicy<u32> for EvictLargest {
  fn on_insert(&mut self, key: &u32) {
    self.keys.insert(*key);
  }

  fn on_access(&mut self, _key: &u32) {}

  fn on_remove(&mut self, key: &u32) {
    self.keys.remove(key);
  }

  fn select_victim(&self) -> Option<u32> {
    self.keys.iter().next_back().copied()
  }

  fn clear(&mut self) {
    self.keys.clear();
  }
}

#[test]
fn test_custom_policy_through_registry() {
  let registry = Registry::<u32, u32>::with_defaults();
  registry
    .register_policy(
      "largest",
      Box::new(|| {
        Box::new(EvictLargest {
          keys: std::collections::BTreeSet::new(),
        })
      }),
    )
    .unwrap();

  let cache = CacheBuilder::new()
    .max_size(2)
    .policy_name(&registry, "largest")
    .unwrap()
    .build()
    .unwrap();

  cache.set(10, 0, None).unwrap();
  cache.set(30, 0, None).unwrap();
  cache.set(20, 0, None).unwrap();

  assert!(cache.get(&30).is_none(), "Largest key should be evicted");
  assert!(cache.contains(&10));
  assert!(cache.contains(&20));
}
