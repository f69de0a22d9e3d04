//! Atomic compound operations
//!
//! A user's primary record and its type-index membership must never diverge
//! on the write path, so both writes go through a transactional pipeline.

use super::pool::RedisStore;
use crate::utils::error::{GateError, Result};

impl RedisStore {
    /// Atomically write a hash field and add a member to an index set
    pub async fn put_indexed(
        &self,
        hash_key: &str,
        field: &str,
        value: &str,
        set_key: &str,
        member: &str,
    ) -> Result<()> {
        let mut conn = self.connection();
        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.hset(hash_key, field, value).ignore();
        pipe.sadd(set_key, member).ignore();
        let _: () = pipe.query_async(&mut conn).await.map_err(GateError::Redis)?;
        Ok(())
    }

    /// Atomically delete a hash key and remove a member from an index set
    pub async fn delete_indexed(&self, hash_key: &str, set_key: &str, member: &str) -> Result<()> {
        let mut conn = self.connection();
        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.del(hash_key).ignore();
        pipe.srem(set_key, member).ignore();
        let _: () = pipe.query_async(&mut conn).await.map_err(GateError::Redis)?;
        Ok(())
    }
}
