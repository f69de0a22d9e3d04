//! Redis store backend
//!
//! ## Module Structure
//!
//! - `pool` - Connection management and health checks
//! - `cache` - Basic key-value operations (get, set, delete, exists, ttl)
//! - `hash` - Hash field operations
//! - `collections` - Set operations
//! - `atomic` - Transactional compound operations
//! - `tests` - Module tests

mod atomic;
mod cache;
mod collections;
mod hash;
mod pool;
#[cfg(test)]
mod tests;

pub use pool::RedisStore;

use crate::storage::KvStore;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        RedisStore::get(self, key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()> {
        RedisStore::set(self, key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        RedisStore::delete(self, key).await
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        RedisStore::exists(self, key).await
    }

    async fn ttl(&self, key: &str) -> Result<i64> {
        RedisStore::ttl(self, key).await
    }

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>> {
        RedisStore::hash_get(self, key, field).await
    }

    async fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<()> {
        RedisStore::hash_set(self, key, field, value).await
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<()> {
        RedisStore::set_add(self, key, member).await
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<()> {
        RedisStore::set_remove(self, key, member).await
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>> {
        RedisStore::set_members(self, key).await
    }

    async fn set_is_member(&self, key: &str, member: &str) -> Result<bool> {
        RedisStore::set_is_member(self, key, member).await
    }

    async fn put_indexed(
        &self,
        hash_key: &str,
        field: &str,
        value: &str,
        set_key: &str,
        member: &str,
    ) -> Result<()> {
        RedisStore::put_indexed(self, hash_key, field, value, set_key, member).await
    }

    async fn delete_indexed(&self, hash_key: &str, set_key: &str, member: &str) -> Result<()> {
        RedisStore::delete_indexed(self, hash_key, set_key, member).await
    }
}
