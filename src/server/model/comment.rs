//! Comment domain model. Comments are immutable once created.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{comment::CommentDto, user::UserSummaryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub sensitive: bool,
    pub created_at: DateTime<Utc>,
    /// `None` when the author's account no longer exists.
    pub author: Option<UserSummaryDto>,
}

impl Comment {
    pub fn from_entity(
        entity: entity::comment::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            user_id: entity.user_id,
            body: entity.body,
            sensitive: entity.sensitive,
            created_at: entity.created_at,
            author: author.map(|user| UserSummaryDto {
                id: user.id,
                name: user.name,
                avatar_url: user.avatar_url,
            }),
        }
    }

    pub fn into_dto(self) -> CommentDto {
        let user = self.author.unwrap_or_else(|| UserSummaryDto {
            id: self.user_id,
            name: "Unknown".to_string(),
            avatar_url: String::new(),
        });

        CommentDto {
            id: self.id,
            ticket_id: self.ticket_id,
            body: self.body,
            sensitive: self.sensitive,
            created_at: self.created_at,
            user,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub ticket_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub sensitive: bool,
}
