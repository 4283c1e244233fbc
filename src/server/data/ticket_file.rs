//! Ticket attachment repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::file::{NewTicketFile, TicketFileContent, TicketFileMeta};

pub struct TicketFileRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketFileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores an attachment. `size` is the byte length of the payload.
    pub async fn create(&self, ticket_id: Uuid, file: NewTicketFile) -> Result<Uuid, DbErr> {
        let entity = entity::ticket_file::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            ticket_id: ActiveValue::Set(ticket_id),
            filename: ActiveValue::Set(file.filename),
            content_type: ActiveValue::Set(file.content_type),
            size: ActiveValue::Set(file.data.len() as i64),
            data: ActiveValue::Set(file.data),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Lists attachment metadata for a ticket without loading payloads.
    pub async fn list_meta(&self, ticket_id: Uuid) -> Result<Vec<TicketFileMeta>, DbErr> {
        entity::prelude::TicketFile::find()
            .select_only()
            .columns([
                entity::ticket_file::Column::Id,
                entity::ticket_file::Column::TicketId,
                entity::ticket_file::Column::Filename,
                entity::ticket_file::Column::ContentType,
                entity::ticket_file::Column::Size,
                entity::ticket_file::Column::CreatedAt,
            ])
            .filter(entity::ticket_file::Column::TicketId.eq(ticket_id))
            .order_by_asc(entity::ticket_file::Column::CreatedAt)
            .into_model::<TicketFileMeta>()
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TicketFileContent>, DbErr> {
        Ok(entity::prelude::TicketFile::find_by_id(id)
            .one(self.db)
            .await?
            .map(TicketFileContent::from_entity))
    }
}
