//! Redis hash operations
//!
//! User records live in hashes under a single `data` field, so only field
//! get/set are needed here.

use super::pool::RedisStore;
use crate::utils::error::{GateError, Result};
use redis::AsyncCommands;

impl RedisStore {
    /// Set a hash field value
    pub async fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<()> {
        let mut conn = self.connection();
        let _: () = conn
            .hset(key, field, value)
            .await
            .map_err(GateError::Redis)?;
        Ok(())
    }

    /// Get a hash field value
    pub async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>> {
        let mut conn = self.connection();
        let value: Option<String> = conn.hget(key, field).await.map_err(GateError::Redis)?;
        Ok(value)
    }
}
