//! Error classification of the MongoDB store without a running server.
//!
//! The client points at a closed port, so every driver call stalls in
//! server selection until the store deadline cuts it off.

use std::time::Duration;

use bson::oid::ObjectId;
use mongodb::Client;

use account_service::domain::User;
use account_service::errors::ErrorKind;
use account_service::infra::repositories::entities::UserDocument;
use account_service::infra::{UserRepository, UserStore};

async fn unreachable_store() -> UserStore {
    // parsing the URI does not connect
    let client = Client::with_uri_str("mongodb://127.0.0.1:1").await.unwrap();
    let collection = client
        .database("account_service_test")
        .collection::<UserDocument>("users");

    UserStore::new(collection).with_timeout(Duration::from_millis(200))
}

fn user() -> User {
    User::new("Ann", "ann@x.io", "secret1")
}

#[tokio::test]
async fn test_each_operation_reports_its_own_kind() {
    let store = unreachable_store().await;
    let id = ObjectId::new().to_hex();

    let err = store.create(user()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CreateOne);

    let err = store.get(&id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GetOne);

    let err = store.get_all().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GetAll);

    let err = store.update(user().with_id(&id)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UpdateOne);

    let err = store.delete(&id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DeleteOne);
}

#[tokio::test]
async fn test_elapsed_deadline_is_reported_as_timeout() {
    let store = unreachable_store().await;

    let started = std::time::Instant::now();
    let err = store.get_all().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GetAll);
    assert!(err.message().contains("timed out"), "{}", err.message());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_bad_input_fails_before_reaching_storage() {
    let store = unreachable_store().await;

    for err in [
        store.get("abc").await.unwrap_err(),
        store.update(user().with_id("abc")).await.unwrap_err(),
        store.delete("abc").await.unwrap_err(),
    ] {
        assert_eq!(err.kind(), ErrorKind::Convert);
    }

    let err = store
        .create(user().with_id(ObjectId::new().to_hex()))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConvertModel);
}
