//! Comment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    ticket_id: Uuid,
    user_id: Uuid,
    body: String,
    sensitive: bool,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, ticket_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            ticket_id,
            user_id,
            body: format!("Comment {}", next_id()),
            sensitive: false,
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            ticket_id: ActiveValue::Set(self.ticket_id),
            user_id: ActiveValue::Set(self.user_id),
            body: ActiveValue::Set(self.body),
            sensitive: ActiveValue::Set(self.sensitive),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_comment(
    db: &DatabaseConnection,
    ticket_id: Uuid,
    user_id: Uuid,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, ticket_id, user_id).build().await
}
