//! Basic Redis key-value operations
//!
//! Core string operations: get, set with optional TTL, delete, exists, ttl.

use super::pool::RedisStore;
use crate::utils::error::{GateError, Result};
use redis::AsyncCommands;

impl RedisStore {
    /// Get a string value
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection();
        let value: Option<String> = conn.get(key).await.map_err(GateError::Redis)?;
        Ok(value)
    }

    /// Set a key-value pair with an optional TTL in seconds
    pub async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()> {
        let mut conn = self.connection();
        if let Some(ttl_seconds) = ttl {
            let _: () = conn
                .set_ex(key, value, ttl_seconds)
                .await
                .map_err(GateError::Redis)?;
        } else {
            let _: () = conn.set(key, value).await.map_err(GateError::Redis)?;
        }
        Ok(())
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection();
        let _: () = conn.del(key).await.map_err(GateError::Redis)?;
        Ok(())
    }

    /// Check if a key exists
    pub async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection();
        let exists: bool = conn.exists(key).await.map_err(GateError::Redis)?;
        Ok(exists)
    }

    /// Get time to live for a key
    pub async fn ttl(&self, key: &str) -> Result<i64> {
        let mut conn = self.connection();
        let ttl: i64 = conn.ttl(key).await.map_err(GateError::Redis)?;
        Ok(ttl)
    }
}
