//! Storage layer for the registry
//!
//! This module defines the key-value store contract shared by the user and
//! session managers, plus its two backends:
//!
//! - `redis` - Redis-backed store over a multiplexed async connection
//! - `memory` - process-local store with identical visible semantics

/// In-memory store backend
pub mod memory;
/// Redis store backend
pub mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

use crate::utils::error::Result;
use async_trait::async_trait;

/// Contract for the key-value store backing the registry.
///
/// Every call is a short, non-cancelable unit of work; connectivity failures
/// propagate as store-layer errors and are not retried here. The two
/// `*_indexed` operations apply their dual writes as a single atomic unit so
/// a primary record and its type-set membership never diverge on the write
/// path.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get a string value
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a string value with an optional TTL in seconds
    async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()>;

    /// Delete a key; no-op if absent
    async fn delete(&self, key: &str) -> Result<()>;

    /// Whether a key exists (and has not expired)
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Remaining TTL in seconds: -2 if the key is absent, -1 if it carries
    /// no expiry
    async fn ttl(&self, key: &str) -> Result<i64>;

    /// Get a hash field value
    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>>;

    /// Set a hash field value
    async fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<()>;

    /// Add a member to a set
    async fn set_add(&self, key: &str, member: &str) -> Result<()>;

    /// Remove a member from a set; no-op if absent
    async fn set_remove(&self, key: &str, member: &str) -> Result<()>;

    /// All members of a set, in no particular order
    async fn set_members(&self, key: &str) -> Result<Vec<String>>;

    /// Whether a member is in a set
    async fn set_is_member(&self, key: &str, member: &str) -> Result<bool>;

    /// Atomically write a hash field and add a member to an index set
    async fn put_indexed(
        &self,
        hash_key: &str,
        field: &str,
        value: &str,
        set_key: &str,
        member: &str,
    ) -> Result<()>;

    /// Atomically delete a hash key and remove a member from an index set
    async fn delete_indexed(&self, hash_key: &str, set_key: &str, member: &str) -> Result<()>;
}
