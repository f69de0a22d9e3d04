//! End-to-end user and session lifecycle scenarios

use crate::common::fixtures::{LOS_ANGELES, Registry};
use silo_gate::{
    Agent, Customer, DEFAULT_SESSION_EXPIRY_SECS, User, UserType, Vendor,
};
use std::time::Duration;
use tokio::time::advance;

#[tokio::test]
async fn test_gate_persist_session_end_delete() {
    let registry = Registry::with_la_silo();

    let mut customer = Customer::new("customer_1");
    assert!(customer.request_session(&registry.silos, LOS_ANGELES));

    let user = User::Customer(customer);
    registry.users.save_user(&user).await.unwrap();
    registry.sessions.create_session(&user).await.unwrap();
    assert!(registry.sessions.session_active(&user).await.unwrap());

    let restored = registry.users.get_user("customer_1").await.unwrap().unwrap();
    assert_eq!(restored, user);
    assert_eq!(restored.location_pin(), Some(LOS_ANGELES));

    registry.sessions.end_session(&user).await.unwrap();
    assert!(!registry.sessions.session_active(&user).await.unwrap());

    registry.users.delete_user("customer_1").await.unwrap();
    assert_eq!(registry.users.get_user("customer_1").await.unwrap(), None);
}

#[tokio::test]
async fn test_saved_agent_round_trips_as_actor() {
    let registry = Registry::empty();

    let agent = User::Agent(Agent::new("a1", UserType::Rider));
    registry.users.save_user(&agent).await.unwrap();

    let restored = registry.users.get_user("a1").await.unwrap().unwrap();
    assert!(matches!(restored, User::Agent(_)));
    assert!(restored.is_actor());
    assert_eq!(restored.session_expiry(), None);

    registry.sessions.create_session(&restored).await.unwrap();
    assert_eq!(registry.sessions.session_ttl(&restored).await.unwrap(), -1);
}

#[tokio::test(start_paused = true)]
async fn test_customer_session_expires_while_agent_session_survives() {
    let registry = Registry::with_la_silo();

    let customer = User::Customer(Customer::new("c1"));
    let agent = User::Agent(Agent::new("a1", UserType::RabbitPhysical));
    registry.sessions.create_session(&customer).await.unwrap();
    registry.sessions.create_session(&agent).await.unwrap();

    advance(Duration::from_secs(DEFAULT_SESSION_EXPIRY_SECS + 1)).await;

    assert!(!registry.sessions.session_active(&customer).await.unwrap());
    assert!(registry.sessions.session_active(&agent).await.unwrap());
}

#[tokio::test]
async fn test_type_index_tracks_saves_and_deletes() {
    let registry = Registry::empty();

    for id in ["c1", "c2", "c3"] {
        registry
            .users
            .save_user(&User::Customer(Customer::new(id)))
            .await
            .unwrap();
    }
    registry
        .users
        .save_user(&User::Vendor(Vendor::new("v1")))
        .await
        .unwrap();
    registry.users.delete_user("c2").await.unwrap();

    let mut customer_ids: Vec<String> = registry
        .users
        .get_users_by_type(UserType::Customer)
        .await
        .unwrap()
        .iter()
        .map(|u| u.user_id().to_string())
        .collect();
    customer_ids.sort();
    assert_eq!(customer_ids, vec!["c1", "c3"]);

    let vendors = registry.users.get_users_by_type(UserType::Vendor).await.unwrap();
    assert_eq!(vendors.len(), 1);
}

#[tokio::test]
async fn test_store_keys_match_schema() {
    use silo_gate::storage::KvStore;

    let registry = Registry::with_la_silo();
    let user = User::Customer(Customer::new("c1"));
    registry.users.save_user(&user).await.unwrap();
    registry.sessions.create_session(&user).await.unwrap();

    assert!(registry.store.hash_get("user:c1", "data").await.unwrap().is_some());
    assert!(registry.store.set_is_member("users:Customer", "c1").await.unwrap());
    assert_eq!(
        registry.store.get("user_session:c1").await.unwrap(),
        Some("active".to_string())
    );
}
