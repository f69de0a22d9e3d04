//! Silo registry and proximity queries
//!
//! A silo is a fixed geographic access point. Platform access for customers
//! and vendors is gated on being within a configurable great-circle distance
//! of at least one registered silo.

use crate::config::SiloConfig;
use crate::core::users::GeoPoint;
use tracing::debug;

/// Mean Earth radius in kilometers (IUGG)
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Registry of silo coordinates with proximity queries
#[derive(Debug, Clone)]
pub struct SiloManager {
    silos: Vec<GeoPoint>,
    threshold_km: f64,
}

impl SiloManager {
    /// Create an empty registry with the configured proximity threshold
    pub fn new(config: &SiloConfig) -> Self {
        Self::with_threshold_km(config.proximity_threshold_km)
    }

    /// Create an empty registry with an explicit threshold in kilometers
    pub fn with_threshold_km(threshold_km: f64) -> Self {
        Self {
            silos: Vec::new(),
            threshold_km,
        }
    }

    /// Register a silo. Silos are immutable once added; duplicates are kept.
    pub fn add_silo(&mut self, coordinates: GeoPoint) {
        debug!(silo = %coordinates, "registering silo");
        self.silos.push(coordinates);
    }

    /// Number of registered silos
    pub fn silo_count(&self) -> usize {
        self.silos.len()
    }

    /// Proximity threshold in kilometers
    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    /// Whether any registered silo is within the threshold of the pin.
    ///
    /// An empty registry always answers false.
    pub fn is_nearby_silo(&self, location_pin: GeoPoint) -> bool {
        self.silos
            .iter()
            .any(|silo| haversine_km(*silo, location_pin) <= self.threshold_km)
    }
}

impl Default for SiloManager {
    fn default() -> Self {
        Self::new(&SiloConfig::default())
    }
}

/// Great-circle distance between two points in kilometers, by the haversine
/// formula over latitudes and longitudes in degrees.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
