//! User persistence over the key-value store

use crate::core::users::{User, UserRecord, UserType};
use crate::storage::KvStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Persists and retrieves users, indexed by type.
///
/// Records live under `user:{user_id}` (hash field `data`, JSON-encoded wire
/// record) with a `users:{user_type}` set of ids per type. Primary record
/// and index membership are updated atomically; saves are last-write-wins.
pub struct UserManager {
    store: Arc<dyn KvStore>,
}

impl UserManager {
    /// Create a manager over an injected store handle
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn user_key(user_id: &str) -> String {
        format!("user:{user_id}")
    }

    fn type_key(user_type: UserType) -> String {
        format!("users:{}", user_type.as_tag())
    }

    /// Persist a user, overwriting any existing record for the same id
    pub async fn save_user(&self, user: &User) -> Result<()> {
        let data = serde_json::to_string(&user.to_record())?;
        self.store
            .put_indexed(
                &Self::user_key(user.user_id()),
                "data",
                &data,
                &Self::type_key(user.user_type()),
                user.user_id(),
            )
            .await?;
        debug!(user_id = %user.user_id(), user_type = %user.user_type(), "saved user");
        Ok(())
    }

    /// Retrieve a user, reconstructing the concrete variant from the stored
    /// type tag.
    ///
    /// Returns `Ok(None)` when no record exists. A malformed record or an
    /// unrecognized type tag is an error, never a silent `None`.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let Some(data) = self.store.hash_get(&Self::user_key(user_id), "data").await? else {
            return Ok(None);
        };
        let record: UserRecord = serde_json::from_str(&data)?;
        Ok(Some(User::from_record(record)?))
    }

    /// All saved users of a type, in no particular order.
    ///
    /// Index entries whose primary record is missing are skipped; the read
    /// path tolerates eventual inconsistency between index and record.
    pub async fn get_users_by_type(&self, user_type: UserType) -> Result<Vec<User>> {
        let ids = self.store.set_members(&Self::type_key(user_type)).await?;
        let mut users = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get_user(&id).await? {
                Some(user) => users.push(user),
                None => debug!(user_id = %id, "skipping dangling index entry"),
            }
        }
        Ok(users)
    }

    /// Delete a user's record and its index membership; no-op if absent
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        let Some(user) = self.get_user(user_id).await? else {
            debug!(user_id, "delete of absent user is a no-op");
            return Ok(());
        };
        self.store
            .delete_indexed(
                &Self::user_key(user_id),
                &Self::type_key(user.user_type()),
                user_id,
            )
            .await?;
        info!(user_id, "deleted user");
        Ok(())
    }
}
