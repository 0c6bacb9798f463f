//! Credential service integration tests
//!
//! Registration and lookup through `CredentialService` over the in-memory
//! store, including concurrent registration of the same username.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use futures_util::future::join_all;
use proptest::prelude::*;

use common::*;
use formauth::backend::auth::password::{PasswordHasher, MIN_COST};
use formauth::backend::auth::service::CredentialService;
use formauth::backend::auth::store::{InMemoryUserStore, UserStore};
use formauth::backend::error::CredentialError;

fn service_with_store() -> (CredentialService, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    let service = CredentialService::new(store.clone(), PasswordHasher::new(MIN_COST));
    (service, store)
}

#[tokio::test]
async fn test_registered_password_is_hashed() {
    let (service, _) = service_with_store();

    let user = assert_ok!(service.register("alice", "password123", "USER").await);

    assert_ne!(user.password_hash, "password123");
    assert!(user.password_hash.starts_with("$2"));
    assert!(service.hasher().verify("password123", &user.password_hash));
    assert!(!service.hasher().verify("password124", &user.password_hash));
}

#[tokio::test]
async fn test_same_password_hashes_differently() {
    let (service, _) = service_with_store();

    let a = service.register("alice", "shared", "USER").await.unwrap();
    let b = service.register("bob", "shared", "USER").await.unwrap();

    assert_ne!(a.password_hash, b.password_hash);
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_usernames_are_case_sensitive() {
    let (service, store) = service_with_store();

    service.register("alice", "pw", "USER").await.unwrap();
    service.register("Alice", "pw", "USER").await.unwrap();

    assert_eq!(store.len().await, 2);
    assert_matches!(service.lookup("ALICE").await, Err(CredentialError::UserNotFound(_)));
}

#[tokio::test]
async fn test_lookup_returns_stored_record() {
    let (service, store) = service_with_store();
    let registered = service.register("bob", "secret", "ADMIN").await.unwrap();

    let found = service.lookup("bob").await.unwrap();

    assert_eq!(found, registered);
    assert_eq!(store.find_by_username("bob").await.unwrap(), Some(registered));
}

#[tokio::test]
async fn test_concurrent_registration_of_one_username() {
    let (service, store) = service_with_store();

    let attempts = (0..8).map(|i| {
        let service = service.clone();
        async move { service.register("racer", &format!("password{}", i), "USER").await }
    });
    let results = join_all(attempts).await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(CredentialError::DuplicateUsername(_))))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_state_helpers_share_one_store() {
    let state = test_state();

    state.credentials.register("grace", "pw", "USER").await.unwrap();

    assert!(state.credentials.lookup("grace").await.is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_register_then_lookup(username in "[a-zA-Z0-9_]{1,24}", password in "[ -~]{0,24}") {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let (service, _) = service_with_store();
            let registered = service.register(&username, &password, "USER").await.unwrap();
            let found = service.lookup(&username).await.unwrap();

            prop_assert_eq!(&found, &registered);
            prop_assert!(service.hasher().verify(&password, &found.password_hash));
            Ok(())
        })?;
    }
}
