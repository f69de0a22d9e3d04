//! User entities and their wire representation

mod types;

pub use types::{
    Agent, Customer, DEFAULT_SESSION_EXPIRY_SECS, GeoPoint, User, UserRecord, UserType, Vendor,
};
