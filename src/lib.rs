//! # silo-gate
//!
//! A user and session registry with role-based access gating by proximity to
//! a fixed set of "silo" locations, backed by Redis or an in-memory store.
//!
//! ## Features
//!
//! - **Proximity gating**: customers and vendors gain access only within a
//!   configurable haversine distance of a registered silo
//! - **Typed users**: a closed Customer/Vendor/Agent union reconstructed
//!   from a stored type tag, never open subclassing
//! - **Indexed persistence**: primary records and per-type id indexes kept
//!   consistent with atomic dual writes
//! - **TTL sessions**: existence markers that expire for regular users and
//!   persist for actor identities
//! - **Pluggable store**: the same [`storage::KvStore`] contract over Redis
//!   or a process-local map
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use silo_gate::storage::MemoryStore;
//! use silo_gate::{Customer, GeoPoint, SessionManager, SiloManager, User, UserManager};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryStore::new());
//!     let users = UserManager::new(store.clone());
//!     let sessions = SessionManager::new(store);
//!
//!     let mut silos = SiloManager::default();
//!     silos.add_silo(GeoPoint::new(34.0522, -118.2437));
//!
//!     let mut customer = Customer::new("customer_1");
//!     if customer.request_session(&silos, GeoPoint::new(34.0522, -118.2437)) {
//!         let user = User::Customer(customer);
//!         users.save_user(&user).await?;
//!         sessions.create_session(&user).await?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

/// Configuration management
pub mod config;
/// Core registry logic
pub mod core;
/// Storage backends
pub mod storage;
/// Shared utilities
pub mod utils;

// Re-export main types
pub use config::{Config, RedisConfig, SiloConfig};
pub use core::session::SessionManager;
pub use core::silo::{SiloManager, haversine_km};
pub use core::user_management::UserManager;
pub use core::users::{
    Agent, Customer, DEFAULT_SESSION_EXPIRY_SECS, GeoPoint, User, UserRecord, UserType, Vendor,
};
pub use utils::error::{GateError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
