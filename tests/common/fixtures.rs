//! Registry fixtures backed by the in-memory store

use silo_gate::storage::MemoryStore;
use silo_gate::{GeoPoint, SessionManager, SiloManager, UserManager};
use std::sync::Arc;

/// Los Angeles, used as the canonical silo location in scenarios
pub const LOS_ANGELES: GeoPoint = GeoPoint {
    latitude: 34.0522,
    longitude: -118.2437,
};

/// A full registry over one shared in-memory store
pub struct Registry {
    pub store: Arc<MemoryStore>,
    pub users: UserManager,
    pub sessions: SessionManager,
    pub silos: SiloManager,
}

impl Registry {
    /// Registry with a single silo at Los Angeles and the default threshold
    pub fn with_la_silo() -> Self {
        let mut registry = Self::empty();
        registry.silos.add_silo(LOS_ANGELES);
        registry
    }

    /// Registry with no silos registered
    pub fn empty() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: UserManager::new(store.clone()),
            sessions: SessionManager::new(store.clone()),
            silos: SiloManager::default(),
            store,
        }
    }
}
