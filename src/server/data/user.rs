//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::user::{CreateUserParams, User};

/// Repository for user records.
///
/// Generic over the connection so it can run inside a transaction during first-login
/// provisioning.
pub struct UserRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user with a fresh UUID.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, e.g. the email is already taken
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            role: ActiveValue::Set(params.role.to_string()),
            avatar_url: ActiveValue::Set(params.avatar_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Loads display names for a set of user IDs. Unknown IDs are absent from the map.
    pub async fn names_by_ids(&self, ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u.name)).collect())
    }

    /// Updates the profile fields refreshed on every login.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    pub async fn update_profile(
        &self,
        id: Uuid,
        name: String,
        avatar_url: String,
    ) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active: entity::user::ActiveModel = user.into();
        active.name = ActiveValue::Set(name);
        active.avatar_url = ActiveValue::Set(avatar_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        User::from_entity(entity)
    }
}
