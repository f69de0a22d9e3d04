//! User persistence
//!
//! [`UserManager`] mirrors user entities into the key-value store and keeps
//! a per-type id index in sync with the primary records.

mod manager;
#[cfg(test)]
mod tests;

pub use manager::UserManager;
