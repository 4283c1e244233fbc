use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::comment::{Comment, CreateCommentParams},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to a ticket. Comments cannot be edited or deleted afterwards.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment with its author summary
    /// - `Err(AppError::BadRequest)` - Body is blank
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        if params.body.trim().is_empty() {
            return Err(AppError::BadRequest("Comment body is required".to_string()));
        }

        Ok(CommentRepository::new(self.db).create(params).await?)
    }

    /// Lists comments oldest first; `include_sensitive` is false for public readers.
    pub async fn list(
        &self,
        ticket_id: Uuid,
        include_sensitive: bool,
    ) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .list_for_ticket(ticket_id, include_sensitive)
            .await?)
    }
}
