use serde_json::Value;
use tracing::{debug, info};

use tuiter_core::{new_id, now_rfc3339};
use tuiter_store::ID_KEY;

use crate::model::{CreateUser, DeleteStatus, UpdateStatus, UpdateUser, User, UserRecord};
use crate::service::collections::{Documents, USERS};
use crate::service::{password, TuiterError};

/// Access object for the `users` collection.
pub struct UserDao {
    pub(crate) docs: Documents,
}

impl UserDao {
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    pub async fn find_all_users(&self) -> Result<Vec<User>, TuiterError> {
        self.docs.find(USERS, &[]).await
    }

    pub async fn find_user_by_id(&self, uid: &str) -> Result<User, TuiterError> {
        self.docs
            .find_by_id(USERS, uid)
            .await?
            .ok_or_else(|| TuiterError::NotFound(format!("users/{uid}")))
    }

    /// Register a user. The password is hashed before it is stored and the
    /// username is not checked for uniqueness.
    pub async fn create_user(&self, input: CreateUser) -> Result<User, TuiterError> {
        let user = User {
            id: new_id(),
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            profile_photo: input.profile_photo,
            header_image: input.header_image,
            biography: input.biography,
            account_type: input.account_type.unwrap_or_default(),
            marital_status: input.marital_status.unwrap_or_default(),
            date_of_birth: input.date_of_birth,
            joined: now_rfc3339(),
            location: input.location.unwrap_or_default(),
        };
        let record = UserRecord {
            user,
            password: password::hash(input.password).await?,
        };

        self.docs.insert(USERS, &record.user.id, &record).await?;
        info!(uid = %record.user.id, username = %record.user.username, "user created");
        Ok(record.user)
    }

    /// Delete one user. Tuits, likes, follows, bookmarks and messages that
    /// reference the user are left in place.
    pub async fn delete_user(&self, uid: &str) -> Result<DeleteStatus, TuiterError> {
        self.docs.delete_one(USERS, &[(ID_KEY, uid)]).await
    }

    pub async fn delete_all_users(&self) -> Result<DeleteStatus, TuiterError> {
        let status = self.docs.delete_many(USERS, &[]).await?;
        info!(deleted = status.deleted_count, "all users deleted");
        Ok(status)
    }

    pub async fn delete_users_by_username(
        &self,
        username: &str,
    ) -> Result<DeleteStatus, TuiterError> {
        self.docs.delete_many(USERS, &[("username", username)]).await
    }

    /// Apply the present fields of `patch`. A new password is hashed first.
    pub async fn update_user(
        &self,
        uid: &str,
        patch: UpdateUser,
    ) -> Result<UpdateStatus, TuiterError> {
        let mut doc =
            serde_json::to_value(&patch).map_err(|e| TuiterError::Internal(e.to_string()))?;
        if let (Some(plain), Value::Object(fields)) = (patch.password, &mut doc) {
            fields.insert("password".into(), Value::String(password::hash(plain).await?));
        }
        self.docs.update_one(USERS, uid, doc).await
    }

    /// The first user named `username` whose stored hash matches `password`.
    pub async fn find_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, TuiterError> {
        let candidates: Vec<UserRecord> = self.docs.find(USERS, &[("username", username)]).await?;
        for record in candidates {
            if password::verify(password.to_string(), record.password).await? {
                return Ok(Some(record.user));
            }
        }
        debug!(username, "credentials rejected");
        Ok(None)
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, TuiterError> {
        self.docs.find_one(USERS, &[("username", username)]).await
    }
}
