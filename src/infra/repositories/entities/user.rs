//! User document as stored in the `users` collection.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::User;
use crate::errors::{AppError, AppResult, ErrorKind};

/// Storage shape of a user.
///
/// Unset fields are left out of the serialized document, so an update built
/// from this type only `$set`s what it carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<bson::DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit_at: Option<bson::DateTime>,
}

impl UserDocument {
    /// Document for a brand-new user; storage assigns `_id`.
    pub fn for_insert(user: &User) -> AppResult<Self> {
        if user.has_id() {
            return Err(AppError::new(
                ErrorKind::ConvertModel,
                format!("new user already carries id {}", user.id),
            ));
        }

        Ok(Self {
            id: None,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            registered_at: Some(bson::DateTime::from_chrono(user.registered_at)),
            last_visit_at: Some(bson::DateTime::from_chrono(user.last_visit_at)),
        })
    }

    /// Target id plus the mutable fields of an existing user.
    ///
    /// Timestamps are left unset so they survive the update untouched.
    pub fn for_update(user: &User) -> AppResult<(ObjectId, Self)> {
        let id = parse_object_id(&user.id)?;

        Ok((
            id,
            Self {
                id: None,
                name: user.name.clone(),
                email: user.email.clone(),
                password: user.password.clone(),
                registered_at: None,
                last_visit_at: None,
            },
        ))
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        let timestamp = |value: Option<bson::DateTime>| {
            value
                .map(bson::DateTime::to_chrono)
                .unwrap_or_else(DateTime::<Utc>::default)
        };

        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            email: doc.email,
            password: doc.password,
            registered_at: timestamp(doc.registered_at),
            last_visit_at: timestamp(doc.last_visit_at),
        }
    }
}

/// Parse a 24-hex-character identifier.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|e| AppError::new(ErrorKind::Convert, format!("invalid user id {id:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_user() -> User {
        let mut user = User::new("Alice", "a@x.io", "secret1");
        user.stamp_visit(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        user
    }

    #[test]
    fn insert_document_has_no_id_field() {
        let doc = UserDocument::for_insert(&sample_user()).unwrap();
        let bson = bson::to_document(&doc).unwrap();

        assert!(!bson.contains_key("_id"));
        assert_eq!(bson.get_str("name").unwrap(), "Alice");
        assert!(bson.contains_key("registered_at"));
    }

    #[test]
    fn insert_rejects_user_with_id() {
        let user = sample_user().with_id(ObjectId::new().to_hex());
        let err = UserDocument::for_insert(&user).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConvertModel);
    }

    #[test]
    fn update_document_omits_timestamps() {
        let id = ObjectId::new();
        let user = sample_user().with_id(id.to_hex());

        let (target, doc) = UserDocument::for_update(&user).unwrap();
        let bson = bson::to_document(&doc).unwrap();

        assert_eq!(target, id);
        assert!(!bson.contains_key("_id"));
        assert!(!bson.contains_key("registered_at"));
        assert!(!bson.contains_key("last_visit_at"));
        assert_eq!(bson.get_str("email").unwrap(), "a@x.io");
    }

    #[test]
    fn update_rejects_malformed_id() {
        let user = sample_user().with_id("abc");
        let err = UserDocument::for_update(&user).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Convert);
    }

    #[test]
    fn document_converts_back_to_domain() {
        let id = ObjectId::new();
        let mut doc = UserDocument::for_insert(&sample_user()).unwrap();
        doc.id = Some(id);

        let user = User::from(doc);

        assert_eq!(user.id, id.to_hex());
        assert_eq!(user.registered_at, sample_user().registered_at);
        assert_eq!(user.password, "secret1");
    }

    #[test]
    fn missing_timestamps_read_as_epoch() {
        let doc = UserDocument {
            id: Some(ObjectId::new()),
            name: "Bob".into(),
            ..Default::default()
        };

        let user = User::from(doc);
        assert_eq!(user.last_visit_at, DateTime::<Utc>::default());
    }
}
