//! UserManager tests against the in-memory backend

use super::UserManager;
use crate::core::users::{Agent, Customer, GeoPoint, User, UserType, Vendor};
use crate::storage::{KvStore, MemoryStore};
use std::sync::Arc;

fn manager() -> (UserManager, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (UserManager::new(store.clone()), store)
}

#[tokio::test]
async fn test_save_then_get_customer() {
    let (users, _) = manager();
    let mut customer = Customer::new("customer_1");
    customer.location_pin = Some(GeoPoint::new(34.0522, -118.2437));
    let user = User::Customer(customer);

    users.save_user(&user).await.unwrap();
    let restored = users.get_user("customer_1").await.unwrap().unwrap();
    assert_eq!(restored, user);
    assert!(matches!(restored, User::Customer(_)));
}

#[tokio::test]
async fn test_save_then_get_agent() {
    let (users, _) = manager();
    let user = User::Agent(Agent::new("agent_1", UserType::Rider));

    users.save_user(&user).await.unwrap();
    let restored = users.get_user("agent_1").await.unwrap().unwrap();
    assert!(matches!(restored, User::Agent(_)));
    assert!(restored.is_actor());
    assert_eq!(restored.session_expiry(), None);
}

#[tokio::test]
async fn test_get_absent_user_is_none() {
    let (users, _) = manager();
    assert_eq!(users.get_user("nobody").await.unwrap(), None);
}

#[tokio::test]
async fn test_save_overwrites_existing_record() {
    let (users, _) = manager();
    let mut customer = Customer::new("c1");
    users.save_user(&User::Customer(customer.clone())).await.unwrap();

    customer.location_pin = Some(GeoPoint::new(48.8566, 2.3522));
    users.save_user(&User::Customer(customer.clone())).await.unwrap();

    let restored = users.get_user("c1").await.unwrap().unwrap();
    assert_eq!(restored.location_pin(), customer.location_pin);
}

#[tokio::test]
async fn test_delete_then_get_is_none() {
    let (users, store) = manager();
    let user = User::Vendor(Vendor::new("v1"));
    users.save_user(&user).await.unwrap();

    users.delete_user("v1").await.unwrap();
    assert_eq!(users.get_user("v1").await.unwrap(), None);
    assert!(!store.set_is_member("users:Vendor", "v1").await.unwrap());

    // Deleting again is a no-op
    users.delete_user("v1").await.unwrap();
}

#[tokio::test]
async fn test_get_users_by_type() {
    let (users, _) = manager();
    users.save_user(&User::Customer(Customer::new("c1"))).await.unwrap();
    users.save_user(&User::Customer(Customer::new("c2"))).await.unwrap();
    users.save_user(&User::Vendor(Vendor::new("v1"))).await.unwrap();
    users.delete_user("c2").await.unwrap();

    let customers = users.get_users_by_type(UserType::Customer).await.unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].user_id(), "c1");

    let vendors = users.get_users_by_type(UserType::Vendor).await.unwrap();
    assert_eq!(vendors.len(), 1);

    let riders = users.get_users_by_type(UserType::Rider).await.unwrap();
    assert!(riders.is_empty());
}

#[tokio::test]
async fn test_dangling_index_entries_are_skipped() {
    let (users, store) = manager();
    users.save_user(&User::Customer(Customer::new("c1"))).await.unwrap();
    // Index entry with no primary record, as after a partial external wipe
    store.set_add("users:Customer", "ghost").await.unwrap();

    let customers = users.get_users_by_type(UserType::Customer).await.unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].user_id(), "c1");
}

#[tokio::test]
async fn test_unknown_stored_type_tag_is_an_error() {
    let (users, store) = manager();
    store
        .hash_set(
            "user:u1",
            "data",
            r#"{"user_id":"u1","user_type":"Courier","actor":false,"session_expiry":172800}"#,
        )
        .await
        .unwrap();

    let err = users.get_user("u1").await.unwrap_err();
    assert!(err.is_invalid_user_type());
}

#[tokio::test]
async fn test_malformed_record_is_an_error() {
    let (users, store) = manager();
    store.hash_set("user:u1", "data", "not json").await.unwrap();
    assert!(users.get_user("u1").await.is_err());
}
