use std::fmt;
use std::io;

/// Errors that can occur when building a cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
  /// The cache was configured with a capacity of zero. A bounded cache
  /// must be able to hold at least one entry.
  ZeroCapacity,
  /// The background cleanup interval was configured as zero.
  ZeroCleanupInterval,
  /// The default TTL was configured as zero, which would make every entry
  /// expire at the instant it is inserted.
  ZeroDefaultTtl,
  /// The named eviction policy is not present in the supplied registry.
  UnknownPolicy(String),
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildError::ZeroCapacity => write!(f, "cache capacity cannot be zero"),
      BuildError::ZeroCleanupInterval => write!(f, "cleanup interval cannot be zero"),
      BuildError::ZeroDefaultTtl => write!(f, "default TTL cannot be zero"),
      BuildError::UnknownPolicy(name) => write!(f, "unknown eviction policy '{}'", name),
    }
  }
}

impl std::error::Error for BuildError {}

/// Errors returned by individual cache operations.
///
/// Ordinary absence and expiration are not errors; `get` reports them as
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
  /// An explicit TTL of zero was passed to `set`. A `Duration` cannot be
  /// negative, so zero is the invalid boundary here.
  InvalidTtl,
}

impl fmt::Display for CacheError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CacheError::InvalidTtl => write!(f, "entry TTL must be greater than zero"),
    }
  }
}

impl std::error::Error for CacheError {}

/// Errors raised by the policy/serializer registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
  /// The name is already registered.
  DuplicateName(String),
  /// No factory is registered under the name.
  UnknownName(String),
}

impl fmt::Display for RegistryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RegistryError::DuplicateName(name) => {
        write!(f, "'{}' is already registered", name)
      }
      RegistryError::UnknownName(name) => write!(f, "'{}' is not registered", name),
    }
  }
}

impl std::error::Error for RegistryError {}

/// Errors surfaced by `save_to_disk` and `load_from_disk`.
///
/// A persistence failure leaves the in-memory cache untouched; the cache
/// remains fully operable afterwards.
#[derive(Debug)]
pub enum PersistenceError {
  /// The serializer failed to encode or decode the image.
  Serialization(String),
  /// The storage backend failed to read or write the bytes.
  Backend(io::Error),
}

impl fmt::Display for PersistenceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PersistenceError::Serialization(msg) => write!(f, "serialization failure: {}", msg),
      PersistenceError::Backend(err) => write!(f, "storage backend failure: {}", err),
    }
  }
}

impl std::error::Error for PersistenceError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PersistenceError::Backend(err) => Some(err),
      PersistenceError::Serialization(_) => None,
    }
  }
}

impl From<io::Error> for PersistenceError {
  fn from(err: io::Error) -> Self {
    PersistenceError::Backend(err)
  }
}
