//! User service tests over the in-memory repository.

mod common;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use account_service::domain::User;
use account_service::errors::ErrorKind;
use account_service::services::{UserManager, UserService};

use common::InMemoryUserRepository;

fn service() -> UserManager {
    UserManager::new(Arc::new(InMemoryUserRepository::default()))
}

#[tokio::test]
async fn test_signup_then_get_returns_stamped_user() {
    let service = service();
    let before = Utc::now();

    let id = service
        .signup(User::new("Ann", "ann@x.io", "secret1"))
        .await
        .unwrap();
    let user = service.get_user_info(&id).await.unwrap();

    assert_eq!(user.id, id);
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "ann@x.io");
    assert_ne!(user.registered_at, DateTime::<Utc>::default());
    assert!(user.registered_at >= before);
    assert_eq!(user.registered_at, user.last_visit_at);
}

#[tokio::test]
async fn test_signup_rejects_preassigned_id() {
    let err = service()
        .signup(User::new("Ann", "ann@x.io", "secret1").with_id("65f1a2b3c4d5e6f708192a3b"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConvertModel);
}

#[tokio::test]
async fn test_get_all_on_empty_store() {
    let users = service().get_all_users_info().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_update_keeps_registration_time() {
    let service = service();
    let id = service
        .signup(User::new("Ann", "ann@x.io", "secret1"))
        .await
        .unwrap();
    let original = service.get_user_info(&id).await.unwrap();

    service
        .update_user_info(User::new("Ann2", "ann2@x.io", "secret2").with_id(&id))
        .await
        .unwrap();
    let updated = service.get_user_info(&id).await.unwrap();

    assert_eq!(updated.name, "Ann2");
    assert_eq!(updated.registered_at, original.registered_at);
}

#[tokio::test]
async fn test_malformed_ids_fail_with_convert() {
    let service = service();

    let err = service.get_user_info("abc").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Convert);

    let err = service
        .update_user_info(User::new("Ann", "ann@x.io", "secret1").with_id("abc"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Convert);

    let err = service.delete_user_account("abc").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Convert);
}

#[tokio::test]
async fn test_delete_twice_fails_second_time() {
    let service = service();
    let id = service
        .signup(User::new("Ann", "ann@x.io", "secret1"))
        .await
        .unwrap();

    service.delete_user_account(&id).await.unwrap();
    let err = service.delete_user_account(&id).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DeleteOne);
}
