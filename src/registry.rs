use crate::error::RegistryError;
use crate::persist::serializer::{BincodeSerializer, JsonSerializer, Serializer};
use crate::policy::{EvictionPolicy, Fifo, Lfu, Lru};

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A factory producing a fresh eviction policy instance.
pub type PolicyFactory<K> = Box<dyn Fn() -> Box<dyn EvictionPolicy<K>> + Send + Sync>;

/// A factory producing a fresh serializer instance.
pub type SerializerFactory<K, V> = Box<dyn Fn() -> Box<dyn Serializer<K, V>> + Send + Sync>;

/// A name-to-implementation registry for eviction policies and serializers.
///
/// The registry is an explicit object with the lifetime of the embedding
/// application, not an ambient singleton; construction code receives it and
/// resolves names through it. Names are case-insensitive.
pub struct Registry<K, V> {
  policies: RwLock<HashMap<String, PolicyFactory<K>>>,
  serializers: RwLock<HashMap<String, SerializerFactory<K, V>>>,
}

impl<K, V> Registry<K, V> {
  /// Creates an empty registry.
  pub fn new() -> Self {
    Self {
      policies: RwLock::new(HashMap::new()),
      serializers: RwLock::new(HashMap::new()),
    }
  }

  /// Registers a policy factory under `name`.
  pub fn register_policy(
    &self,
    name: &str,
    factory: PolicyFactory<K>,
  ) -> Result<(), RegistryError> {
    let key = name.to_ascii_lowercase();
    let mut policies = self.policies.write();
    if policies.contains_key(&key) {
      return Err(RegistryError::DuplicateName(name.to_string()));
    }
    policies.insert(key, factory);
    Ok(())
  }

  /// Registers a serializer factory under `name`.
  pub fn register_serializer(
    &self,
    name: &str,
    factory: SerializerFactory<K, V>,
  ) -> Result<(), RegistryError> {
    let key = name.to_ascii_lowercase();
    let mut serializers = self.serializers.write();
    if serializers.contains_key(&key) {
      return Err(RegistryError::DuplicateName(name.to_string()));
    }
    serializers.insert(key, factory);
    Ok(())
  }

  /// Builds a policy instance from its registered name.
  pub fn policy(&self, name: &str) -> Result<Box<dyn EvictionPolicy<K>>, RegistryError> {
    let key = name.to_ascii_lowercase();
    let policies = self.policies.read();
    policies
      .get(&key)
      .map(|factory| factory())
      .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
  }

  /// Builds a serializer instance from its registered name.
  pub fn serializer(&self, name: &str) -> Result<Box<dyn Serializer<K, V>>, RegistryError> {
    let key = name.to_ascii_lowercase();
    let serializers = self.serializers.read();
    serializers
      .get(&key)
      .map(|factory| factory())
      .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
  }
}

impl<K, V> Registry<K, V>
where
  K: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
  V: Serialize + DeserializeOwned + 'static,
{
  /// Creates a registry preloaded with the built-in implementations:
  /// `"lru"`, `"fifo"`, and `"lfu"` policies, `"json"` and `"bincode"`
  /// serializers.
  pub fn with_defaults() -> Self {
    let registry = Self::new();

    // These names cannot collide in a fresh registry.
    let _ = registry.register_policy("lru", Box::new(|| Box::new(Lru::new())));
    let _ = registry.register_policy("fifo", Box::new(|| Box::new(Fifo::new())));
    let _ = registry.register_policy("lfu", Box::new(|| Box::new(Lfu::new())));
    let _ = registry.register_serializer("json", Box::new(|| Box::new(JsonSerializer)));
    let _ = registry.register_serializer("bincode", Box::new(|| Box::new(BincodeSerializer)));

    registry
  }
}

impl<K, V> Default for Registry<K, V>
where
  K: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
  V: Serialize + DeserializeOwned + 'static,
{
  fn default() -> Self {
    Self::with_defaults()
  }
}
