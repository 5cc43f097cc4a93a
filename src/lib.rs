//! An embeddable, thread-safe in-memory cache.
//!
//! # Features
//! - **Bounded storage**: A capacity bound enforced by eviction, never by
//!   rejecting writes.
//! - **TTL expiration**: Per-entry or default time-to-live, with lazy
//!   removal on read plus a background cleanup task.
//! - **Pluggable eviction**: LRU, LFU, and FIFO built in; custom policies
//!   via a name-to-implementation registry.
//! - **Observability**: Atomic operation counters that never contend with
//!   cache operations.
//! - **Persistence**: Save and load snapshots through pluggable serializer
//!   and storage-backend collaborators.
//!
//! The cache is a single-process, in-memory structure; cross-process
//! sharing happens only through explicit save/load snapshots.

// Public modules that form the API
pub mod builder;
pub mod error;
pub mod handles;
pub mod memo;
pub mod metrics;
pub mod persist;
pub mod policy;
pub mod registry;

// Internal, crate-only modules
mod entry;
mod shared;
mod store;
mod task;
mod time;

// Re-export the primary user-facing types for convenience
pub use builder::CacheBuilder;
pub use error::{BuildError, CacheError, PersistenceError, RegistryError};
pub use handles::Cache;
pub use memo::Memoized;
pub use metrics::MetricsSnapshot;
pub use persist::backend::{FileBackend, StorageBackend};
pub use persist::serializer::{BincodeSerializer, JsonSerializer, Serializer};
pub use persist::{CacheImage, ImageEntry};
pub use policy::{EvictionPolicy, Fifo, Lfu, Lru};
pub use registry::Registry;
