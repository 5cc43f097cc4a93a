use quickcache::{
  BincodeSerializer, CacheBuilder, FileBackend, JsonSerializer, PersistenceError, StorageBackend,
};
use std::path::Path;
use std::{thread, time::Duration};

#[test]
fn test_round_trip_reproduces_live_entries() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("cache.json");

  let source = CacheBuilder::<String, String>::new().max_size(8).build().unwrap();
  source.set("forever".into(), "a".into(), None).unwrap();
  source
    .set("long".into(), "b".into(), Some(Duration::from_secs(300)))
    .unwrap();

  source
    .save_to_disk(&path, &JsonSerializer, &FileBackend)
    .unwrap();

  let restored = CacheBuilder::<String, String>::new().max_size(8).build().unwrap();
  let loaded = restored
    .load_from_disk(&path, &JsonSerializer, &FileBackend)
    .unwrap();

  assert_eq!(loaded, 2);
  assert_eq!(
    restored.get(&"forever".into()).as_deref(),
    Some(&"a".to_string())
  );
  assert_eq!(restored.get(&"long".into()).as_deref(), Some(&"b".to_string()));
}

#[test]
fn test_entry_expiring_between_save_and_load_is_dropped() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("cache.bin");

  let source = CacheBuilder::<String, i32>::new().build().unwrap();
  source.set("keep".into(), 1, None).unwrap();
  source
    .set("doomed".into(), 2, Some(Duration::from_millis(100)))
    .unwrap();

  source
    .save_to_disk(&path, &BincodeSerializer, &FileBackend)
    .unwrap();
  thread::sleep(Duration::from_millis(250));

  let restored = CacheBuilder::<String, i32>::new().build().unwrap();
  let loaded = restored
    .load_from_disk(&path, &BincodeSerializer, &FileBackend)
    .unwrap();

  assert_eq!(loaded, 1);
  assert!(restored.contains(&"keep".into()));
  assert!(
    !restored.contains(&"doomed".into()),
    "Expired entries must not be resurrected"
  );
}

#[test]
fn test_loading_into_smaller_cache_evicts_to_capacity() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("cache.json");

  let source = CacheBuilder::<u32, u32>::new().max_size(4).build().unwrap();
  for i in 0..4 {
    source.set(i, i, None).unwrap();
  }
  source
    .save_to_disk(&path, &JsonSerializer, &FileBackend)
    .unwrap();

  let restored = CacheBuilder::<u32, u32>::new().max_size(2).build().unwrap();
  restored
    .load_from_disk(&path, &JsonSerializer, &FileBackend)
    .unwrap();

  assert_eq!(restored.len(), 2);
  assert!(restored.metrics().evictions >= 2);
}

#[test]
fn test_remaining_ttl_survives_the_round_trip() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("cache.json");

  let source = CacheBuilder::<String, i32>::new().build().unwrap();
  source
    .set("short".into(), 1, Some(Duration::from_millis(200)))
    .unwrap();
  source
    .save_to_disk(&path, &JsonSerializer, &FileBackend)
    .unwrap();

  let restored = CacheBuilder::<String, i32>::new().build().unwrap();
  restored
    .load_from_disk(&path, &JsonSerializer, &FileBackend)
    .unwrap();

  assert!(restored.contains(&"short".into()));
  thread::sleep(Duration::from_millis(350));
  assert!(
    !restored.contains(&"short".into()),
    "TTL must keep counting down after load"
  );
}

#[test]
fn test_load_replaces_previous_contents() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("cache.json");

  let source = CacheBuilder::<String, i32>::new().build().unwrap();
  source.set("new".into(), 1, None).unwrap();
  source
    .save_to_disk(&path, &JsonSerializer, &FileBackend)
    .unwrap();

  let target = CacheBuilder::<String, i32>::new().build().unwrap();
  target.set("old".into(), 0, None).unwrap();
  target
    .load_from_disk(&path, &JsonSerializer, &FileBackend)
    .unwrap();

  assert!(target.contains(&"new".into()));
  assert!(!target.contains(&"old".into()), "Load is a bulk replace");
}

struct BrokenBackend;

impl StorageBackend for BrokenBackend {
  fn write(&self, _path: &Path, _bytes: &[u8]) -> Result<(), PersistenceError> {
    Err(PersistenceError::Backend(std::io::Error::new(
      std::io::ErrorKind::PermissionDenied,
      "disk unavailable",
    )))
  }

  fn read(&self, _path: &Path) -> Result<Vec<u8>, PersistenceError> {
    Err(PersistenceError::Backend(std::io::Error::new(
      std::io::ErrorKind::NotFound,
      "disk unavailable",
    )))
  }
}

#[test]
fn test_failed_save_leaves_cache_operable() {
  let cache = CacheBuilder::<String, i32>::new().build().unwrap();
  cache.set("key".into(), 1, None).unwrap();

  let result = cache.save_to_disk("anywhere", &JsonSerializer, &BrokenBackend);
  assert!(matches!(result, Err(PersistenceError::Backend(_))));

  assert_eq!(cache.get(&"key".into()).as_deref(), Some(&1));
  cache.set("another".into(), 2, None).unwrap();
  assert_eq!(cache.len(), 2);
}

#[test]
fn test_failed_load_leaves_cache_unchanged() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("corrupt.json");
  std::fs::write(&path, b"this is not json").unwrap();

  let cache = CacheBuilder::<String, i32>::new().build().unwrap();
  cache.set("key".into(), 1, None).unwrap();

  let result = cache.load_from_disk(&path, &JsonSerializer, &FileBackend);
  assert!(matches!(result, Err(PersistenceError::Serialization(_))));

  assert_eq!(
    cache.get(&"key".into()).as_deref(),
    Some(&1),
    "Failed load must not clear the cache"
  );
}
