//! Session lifecycle
//!
//! [`SessionManager`] maintains the existence markers that represent active
//! platform access, TTL-bound for non-actor users.

mod manager;

pub use manager::SessionManager;
