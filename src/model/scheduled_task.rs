use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduledTaskDto {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub description: String,
    pub frequency: String,
    pub start_date: DateTime<Utc>,
    pub next_run_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub assignee_user_id: Option<Uuid>,
    pub priority_id: String,
    pub location: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateScheduledTaskDto {
    pub organization_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub frequency: String,
    pub start_date: DateTime<Utc>,
    pub priority_id: String,
    #[serde(default)]
    pub assignee_user_id: Option<Uuid>,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateScheduledTaskDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub priority_id: Option<String>,
    pub assignee_user_id: Option<Uuid>,
    pub location: Option<String>,
    pub enabled: Option<bool>,
}
