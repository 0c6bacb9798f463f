//! PostgreSQL user store integration tests
//!
//! Skipped unless `DATABASE_URL` points at a reachable database.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use futures_util::future::join_all;

use common::*;
use formauth::backend::auth::store::{PgUserStore, UserStore};
use formauth::backend::auth::users::UserRecordDraft;
use formauth::backend::error::CredentialError;

#[tokio::test]
async fn test_insert_and_find() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let store = PgUserStore::new(db.pool().clone());
    let username = unique_username("pg_insert");

    let inserted = store
        .insert(UserRecordDraft::new(username.clone(), "$2b$04$notarealhash", "ADMIN"))
        .await
        .unwrap();
    let found = store.find_by_username(&username).await.unwrap();

    assert_eq!(found, Some(inserted.clone()));
    assert_eq!(inserted.role, "ADMIN");
    assert!(inserted.id > 0);

    db.delete_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_find_missing() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let store = PgUserStore::new(db.pool().clone());

    let found = store.find_by_username(&unique_username("pg_missing")).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_duplicate_insert() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let store = PgUserStore::new(db.pool().clone());
    let username = unique_username("pg_dup");

    store
        .insert(UserRecordDraft::new(username.clone(), "hash-one", "USER"))
        .await
        .unwrap();
    let second = store
        .insert(UserRecordDraft::new(username.clone(), "hash-two", "USER"))
        .await;

    assert_matches!(second, Err(CredentialError::DuplicateUsername(ref name)) if *name == username);
    let kept = store.find_by_username(&username).await.unwrap().unwrap();
    assert_eq!(kept.password_hash, "hash-one");

    db.delete_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_inserts_of_one_username() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let store = PgUserStore::new(db.pool().clone());
    let username = unique_username("pg_race");

    let attempts = (0..8).map(|i| {
        let store = store.clone();
        let draft = UserRecordDraft::new(username.clone(), format!("hash-{}", i), "USER");
        tokio::spawn(async move { store.insert(draft).await })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(CredentialError::DuplicateUsername(_))))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(duplicates, 7);

    db.delete_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_login_flow_against_postgres() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let server = test_server_for(test_state_with(Arc::new(PgUserStore::new(db.pool().clone()))));
    let username = unique_username("pg_flow");

    let registered = register_user(&server, &username, "password123", "USER").await;
    assert_eq!(registered.status_code(), StatusCode::OK);

    let duplicate = register_user(&server, &username, "password123", "USER").await;
    assert_eq!(duplicate.status_code(), StatusCode::CONFLICT);

    let login = login_user(&server, &username, "password123").await;
    assert_redirects_to(&login, "/");

    db.delete_user(&username).await.unwrap();
}
