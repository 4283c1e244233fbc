//! Ticket attachment models.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use uuid::Uuid;

use crate::model::ticket::TicketFileDto;

/// Uploaded file waiting to be stored alongside a new ticket.
#[derive(Debug, Clone)]
pub struct NewTicketFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Attachment metadata, selected without the payload column.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct TicketFileMeta {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

impl TicketFileMeta {
    pub fn into_dto(self) -> TicketFileDto {
        TicketFileDto {
            id: self.id,
            filename: self.filename,
            content_type: self.content_type,
            size: self.size,
            created_at: self.created_at,
        }
    }
}

/// Full attachment including its bytes, for downloads.
#[derive(Debug, Clone)]
pub struct TicketFileContent {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl TicketFileContent {
    pub fn from_entity(entity: entity::ticket_file::Model) -> Self {
        Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            filename: entity.filename,
            content_type: entity.content_type,
            data: entity.data,
        }
    }

    /// Images open in the browser; everything else downloads.
    ///
    /// Quotes, backslashes and control characters in the stored filename become `_`
    /// so the value is always a valid header.
    pub fn content_disposition(&self) -> String {
        let disposition = if self.content_type.starts_with("image/") {
            "inline"
        } else {
            "attachment"
        };
        let filename: String = self
            .filename
            .chars()
            .map(|c| {
                if c.is_control() || c == '"' || c == '\\' {
                    '_'
                } else {
                    c
                }
            })
            .collect();

        format!("{}; filename=\"{}\"", disposition, filename)
    }
}
