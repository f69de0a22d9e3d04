//! Proximity-gating scenarios

use crate::common::fixtures::{LOS_ANGELES, Registry};
use silo_gate::{Customer, GeoPoint, Vendor};

#[tokio::test]
async fn test_customer_at_silo_gains_access() {
    let registry = Registry::with_la_silo();

    let mut customer = Customer::new("c1");
    assert!(customer.request_session(&registry.silos, LOS_ANGELES));
    assert_eq!(customer.location_pin, Some(LOS_ANGELES));
}

#[tokio::test]
async fn test_customer_far_from_silos_is_denied() {
    let registry = Registry::with_la_silo();

    let mut customer = Customer::new("c2");
    assert!(!customer.request_session(&registry.silos, GeoPoint::new(0.0, 0.0)));
    assert_eq!(customer.location_pin, None);
}

#[tokio::test]
async fn test_vendor_follows_same_contract() {
    let registry = Registry::with_la_silo();

    let mut vendor = Vendor::new("v1");
    let near = GeoPoint::new(LOS_ANGELES.latitude + 0.05, LOS_ANGELES.longitude);
    assert!(vendor.enter_location(&registry.silos, near));
    assert_eq!(vendor.location_pin, Some(near));

    let mut denied = Vendor::new("v2");
    assert!(!denied.enter_location(&registry.silos, GeoPoint::new(51.5074, -0.1278)));
    assert_eq!(denied.location_pin, None);
}

#[tokio::test]
async fn test_no_silos_means_no_access_anywhere() {
    let registry = Registry::empty();

    let mut customer = Customer::new("c1");
    assert!(!customer.request_session(&registry.silos, LOS_ANGELES));
    assert_eq!(customer.location_pin, None);
}
