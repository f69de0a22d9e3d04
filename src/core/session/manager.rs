//! Session lifecycle over the key-value store

use crate::core::users::User;
use crate::storage::KvStore;
use crate::utils::error::{GateError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Marker value stored for an active session
const SESSION_MARKER: &str = "active";

/// Creates and ends session records keyed by user identity.
///
/// A session is an existence marker at `user_session:{user_id}`. Actor
/// sessions carry no TTL; everyone else's expire after the user's
/// `session_expiry`. The lifecycle is absent -> active -> absent, via
/// explicit end or TTL expiry.
pub struct SessionManager {
    store: Arc<dyn KvStore>,
}

impl SessionManager {
    /// Create a manager over an injected store handle
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn session_key(user_id: &str) -> String {
        format!("user_session:{user_id}")
    }

    /// Open a session for a user.
    ///
    /// A non-actor user without a session expiry cannot hold a session;
    /// that combination violates the default-expiry invariant and fails
    /// with [`GateError::SessionCreationSkipped`] rather than silently
    /// doing nothing.
    pub async fn create_session(&self, user: &User) -> Result<()> {
        let key = Self::session_key(user.user_id());
        if user.is_actor() {
            self.store.set(&key, SESSION_MARKER, None).await?;
            info!(user_id = %user.user_id(), "opened non-expiring session");
            return Ok(());
        }

        match user.session_expiry() {
            Some(expiry_secs) => {
                self.store.set(&key, SESSION_MARKER, Some(expiry_secs)).await?;
                info!(user_id = %user.user_id(), expiry_secs, "opened session");
                Ok(())
            }
            None => Err(GateError::SessionCreationSkipped(
                user.user_id().to_string(),
            )),
        }
    }

    /// End a user's session; no-op if none is active
    pub async fn end_session(&self, user: &User) -> Result<()> {
        self.store
            .delete(&Self::session_key(user.user_id()))
            .await?;
        debug!(user_id = %user.user_id(), "ended session");
        Ok(())
    }

    /// Whether the user currently holds an active session
    pub async fn session_active(&self, user: &User) -> Result<bool> {
        self.store.exists(&Self::session_key(user.user_id())).await
    }

    /// Remaining session TTL in seconds: -2 when no session is active,
    /// -1 for a non-expiring session
    pub async fn session_ttl(&self, user: &User) -> Result<i64> {
        self.store.ttl(&Self::session_key(user.user_id())).await
    }
}
