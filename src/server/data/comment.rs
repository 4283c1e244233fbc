//! Comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::comment::{Comment, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment and returns it with its author's summary.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let comment = entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            ticket_id: ActiveValue::Set(params.ticket_id),
            user_id: ActiveValue::Set(params.user_id),
            body: ActiveValue::Set(params.body),
            sensitive: ActiveValue::Set(params.sensitive),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::User::find_by_id(comment.user_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(comment, author))
    }

    /// Lists a ticket's comments oldest first.
    ///
    /// # Arguments
    /// - `ticket_id` - Ticket whose comments to load
    /// - `include_sensitive` - When false, sensitive comments are left out
    pub async fn list_for_ticket(
        &self,
        ticket_id: Uuid,
        include_sensitive: bool,
    ) -> Result<Vec<Comment>, DbErr> {
        let mut query = entity::prelude::Comment::find()
            .filter(entity::comment::Column::TicketId.eq(ticket_id));

        if !include_sensitive {
            query = query.filter(entity::comment::Column::Sensitive.eq(false));
        }

        let rows = query
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| Comment::from_entity(comment, author))
            .collect())
    }
}
