use portal_backend::adapters::SeaManagers;
use portal_backend::errors::domain::ConflictKind;
use portal_backend::repos::{ManagerStore, NewManager, PrincipalStore};
use portal_backend::{connect_db, DomainError};
use portal_test_support::unique_helpers::unique_email;
use uuid::Uuid;

async fn store() -> SeaManagers {
    let db = connect_db("sqlite::memory:")
        .await
        .expect("sqlite should connect and migrate");
    SeaManagers::new(db)
}

fn new_manager(email: &str) -> NewManager {
    NewManager {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: email.into(),
        password_hash: "not-a-real-hash".into(),
    }
}

#[tokio::test]
async fn insert_then_lookup_by_id_and_email() {
    let store = store().await;
    let email = unique_email("ada");
    let created = store.insert(new_manager(&email)).await.unwrap();

    assert_eq!(created.email, email);
    assert_eq!(created.email_normalized, email.to_uppercase());

    let by_id = store.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.as_ref(), Some(&created));

    let by_email = store
        .find_by_email(&format!("  {}  ", email.to_uppercase()))
        .await
        .unwrap();
    assert_eq!(by_email.map(|m| m.id), Some(created.id));
}

#[tokio::test]
async fn unknown_lookups_return_none() {
    let store = store().await;

    assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    assert!(store
        .find_by_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn duplicate_email_ignoring_case_conflicts() {
    let store = store().await;
    store.insert(new_manager("ops@example.com")).await.unwrap();

    let err = store
        .insert(new_manager("OPS@Example.com"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::UniqueEmail, _)),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn exists_tracks_rows() {
    let store = store().await;
    let created = store.insert(new_manager(&unique_email("e"))).await.unwrap();

    assert!(store.exists(created.id).await.unwrap());
    assert!(!store.exists(Uuid::new_v4()).await.unwrap());
}
