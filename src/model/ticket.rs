use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status_id: String,
    pub priority_id: String,
    pub reporter_id: Uuid,
    pub assignee_user_id: Option<Uuid>,
    pub sensitive: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Ticket row in list responses. `description` is always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketListItemDto {
    #[serde(flatten)]
    pub ticket: TicketDto,
    pub reporter_name: Option<String>,
    pub assignee_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketDetailDto {
    #[serde(flatten)]
    pub ticket: TicketDto,
    pub reporter_name: Option<String>,
    pub assignee_name: Option<String>,
    pub files: Vec<TicketFileDto>,
}

/// Ticket as exposed through a public view link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicTicketDto {
    #[serde(flatten)]
    pub ticket: TicketDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,
    pub assignee_name: Option<String>,
}

/// Attachment metadata; the payload is served by the file download endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketFileDto {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTicketDto {
    pub organization_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub priority_id: String,
    #[serde(default)]
    pub assignee_user_id: Option<Uuid>,
    #[serde(default)]
    pub sensitive: bool,
}

/// Partial ticket update. Absent fields are left unchanged; a nil `assignee_id`
/// clears the assignee.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTicketDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub priority_id: Option<String>,
    pub status_id: Option<String>,
    pub assignee_id: Option<Uuid>,
    pub sensitive: Option<bool>,
}

/// Ticket submitted through an organization's share link.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PublicTicketSubmissionDto {
    pub token: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority_id: String,
    pub name: String,
    pub email: String,
}
