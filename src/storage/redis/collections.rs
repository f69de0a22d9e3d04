//! Redis set operations
//!
//! The per-type user indexes are plain sets of user ids.

use super::pool::RedisStore;
use crate::utils::error::{GateError, Result};
use redis::AsyncCommands;

impl RedisStore {
    /// Add member to set
    pub async fn set_add(&self, key: &str, member: &str) -> Result<()> {
        let mut conn = self.connection();
        let _: () = conn.sadd(key, member).await.map_err(GateError::Redis)?;
        Ok(())
    }

    /// Remove member from set
    pub async fn set_remove(&self, key: &str, member: &str) -> Result<()> {
        let mut conn = self.connection();
        let _: () = conn.srem(key, member).await.map_err(GateError::Redis)?;
        Ok(())
    }

    /// Get all set members
    pub async fn set_members(&self, key: &str) -> Result<Vec<String>> {
        let mut conn = self.connection();
        let members: Vec<String> = conn.smembers(key).await.map_err(GateError::Redis)?;
        Ok(members)
    }

    /// Check if member is in set
    pub async fn set_is_member(&self, key: &str, member: &str) -> Result<bool> {
        let mut conn = self.connection();
        let is_member: bool = conn
            .sismember(key, member)
            .await
            .map_err(GateError::Redis)?;
        Ok(is_member)
    }
}
