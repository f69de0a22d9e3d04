//! Core registry logic
//!
//! Leaf-first: silo proximity, user entities, user persistence, sessions.

/// Session lifecycle
pub mod session;
/// Silo registry and proximity queries
pub mod silo;
/// User persistence
pub mod user_management;
/// User entities
pub mod users;
