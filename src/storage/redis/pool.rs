//! Redis connection management
//!
//! This module provides Redis connectivity over a multiplexed async
//! connection, plus health checks. Network-level timeouts are owned by the
//! connection, not by the callers.

use crate::config::RedisConfig;
use crate::utils::error::{GateError, Result};
use redis::{Client, aio::MultiplexedConnection};
use std::time::Duration;
use tracing::{debug, info};

/// Redis-backed key-value store
#[derive(Debug, Clone)]
pub struct RedisStore {
    /// Shared multiplexed connection
    pub(crate) conn: MultiplexedConnection,
    /// Configuration
    pub(crate) config: RedisConfig,
}

impl RedisStore {
    /// Connect to Redis
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        info!("Connecting to Redis");
        debug!("Redis URL: {}", Self::sanitize_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(GateError::Redis)?;
        let timeout = Duration::from_secs(config.connection_timeout);
        let conn = client
            .get_multiplexed_async_connection_with_timeouts(timeout, timeout)
            .await
            .map_err(GateError::Redis)?;

        info!("Redis connection established");
        Ok(Self {
            conn,
            config: config.clone(),
        })
    }

    /// Get a handle to the shared connection
    pub(crate) fn connection(&self) -> MultiplexedConnection {
        self.conn.clone()
    }

    /// Health check via PING
    pub async fn health_check(&self) -> Result<()> {
        debug!(
            "Pinging Redis at {}",
            Self::sanitize_url(&self.config.url)
        );
        let mut conn = self.connection();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(GateError::Redis)?;
        debug!("Redis health check passed");
        Ok(())
    }

    /// Sanitize a Redis URL for logging (hide password)
    pub(crate) fn sanitize_url(url: &str) -> String {
        if let Ok(parsed) = url::Url::parse(url) {
            let mut sanitized = parsed.clone();
            if sanitized.password().is_some() {
                let _ = sanitized.set_password(Some("***"));
            }
            sanitized.to_string()
        } else {
            "invalid_url".to_string()
        }
    }
}
