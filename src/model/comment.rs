use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub body: String,
    pub sensitive: bool,
    pub created_at: DateTime<Utc>,
    pub user: UserSummaryDto,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub body: String,
    #[serde(default)]
    pub sensitive: bool,
}
