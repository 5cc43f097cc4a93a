use crate::error::PersistenceError;
use crate::persist::CacheImage;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Byte-level encoding of a cache image.
///
/// Implementations must round-trip: `decode(encode(image))` reproduces the
/// image for any image the cache can export.
pub trait Serializer<K, V>: Send + Sync {
  fn encode(&self, image: &CacheImage<K, V>) -> Result<Vec<u8>, PersistenceError>;
  fn decode(&self, bytes: &[u8]) -> Result<CacheImage<K, V>, PersistenceError>;
}

impl<K, V> std::fmt::Debug for dyn Serializer<K, V> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Serializer")
  }
}

/// A human-readable JSON encoding of the image.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<K, V> Serializer<K, V> for JsonSerializer
where
  K: Serialize + DeserializeOwned,
  V: Serialize + DeserializeOwned,
{
  fn encode(&self, image: &CacheImage<K, V>) -> Result<Vec<u8>, PersistenceError> {
    serde_json::to_vec(image).map_err(|err| PersistenceError::Serialization(err.to_string()))
  }

  fn decode(&self, bytes: &[u8]) -> Result<CacheImage<K, V>, PersistenceError> {
    serde_json::from_slice(bytes).map_err(|err| PersistenceError::Serialization(err.to_string()))
  }
}

/// A compact binary encoding of the image.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeSerializer;

impl<K, V> Serializer<K, V> for BincodeSerializer
where
  K: Serialize + DeserializeOwned,
  V: Serialize + DeserializeOwned,
{
  fn encode(&self, image: &CacheImage<K, V>) -> Result<Vec<u8>, PersistenceError> {
    bincode::serialize(image).map_err(|err| PersistenceError::Serialization(err.to_string()))
  }

  fn decode(&self, bytes: &[u8]) -> Result<CacheImage<K, V>, PersistenceError> {
    bincode::deserialize(bytes).map_err(|err| PersistenceError::Serialization(err.to_string()))
  }
}
