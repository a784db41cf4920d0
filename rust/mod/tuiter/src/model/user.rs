use serde::{Deserialize, Serialize};

/// Kind of account a user registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Personal,
    Academic,
    Professional,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Married,
    #[default]
    Single,
    Widowed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// A user account as returned to clients.
///
/// The password hash lives next to these fields in the stored document
/// (see [`UserRecord`]) and is never part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (UUIDv4, no dashes).
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Login name. Uniqueness is not enforced by the store.
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Profile photo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,

    /// Header image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,

    #[serde(default)]
    pub account_type: AccountType,

    #[serde(default)]
    pub marital_status: MaritalStatus,

    /// Birth date as given by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// RFC 3339 timestamp of account creation.
    pub joined: String,

    #[serde(default)]
    pub location: Location,
}

/// The stored form of a user: profile plus password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserRecord {
    #[serde(flatten)]
    pub user: User,

    /// argon2id PHC string.
    pub password: String,
}

/// Input for creating a new user. Unknown fields are dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// Partial update for a user. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Plain password; hashed before it is stored.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(AccountType::Professional).unwrap(),
            serde_json::json!("PROFESSIONAL")
        );
        assert_eq!(
            serde_json::from_value::<MaritalStatus>(serde_json::json!("WIDOWED")).unwrap(),
            MaritalStatus::Widowed
        );
    }

    #[test]
    fn test_stored_record_hides_password_from_user_view() {
        let stored = serde_json::json!({
            "_id": "u1",
            "username": "alice",
            "password": "$argon2id$hash",
            "joined": "2026-01-01T00:00:00Z",
        });

        let record: UserRecord = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(record.password, "$argon2id$hash");
        assert_eq!(record.user.account_type, AccountType::Personal);
        assert_eq!(record.user.marital_status, MaritalStatus::Single);

        let user: User = serde_json::from_value(stored).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["_id"], "u1");
        assert_eq!(json["location"], serde_json::json!({"latitude": 0.0, "longitude": 0.0}));
    }

    #[test]
    fn test_update_never_serializes_password() {
        let patch = UpdateUser {
            password: Some("secret".into()),
            biography: Some("hi".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"biography": "hi"})
        );
    }

    #[test]
    fn test_create_drops_unknown_fields() {
        let input: CreateUser = serde_json::from_value(serde_json::json!({
            "username": "bob",
            "password": "pw",
            "isAdmin": true,
        }))
        .unwrap();
        assert_eq!(input.username, "bob");
        assert!(input.account_type.is_none());
    }
}
