//! Scheduled task domain models.
//!
//! A scheduled task is a recurring ticket template. Nothing executes it; the server only
//! keeps `next_run_at` current whenever the recurrence changes.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::{
    model::scheduled_task::{CreateScheduledTaskDto, ScheduledTaskDto, UpdateScheduledTaskDto},
    server::{error::AppError, model::ticket::TicketPriority},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(AppError::BadRequest(format!("Invalid frequency: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTask {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub description: String,
    pub frequency: Frequency,
    pub start_date: DateTime<Utc>,
    pub next_run_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub assignee_user_id: Option<Uuid>,
    pub priority: TicketPriority,
    pub location: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduledTask {
    pub fn from_entity(entity: entity::scheduled_task::Model) -> Result<Self, DbErr> {
        let frequency = entity
            .frequency
            .parse::<Frequency>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse task frequency: {}", e)))?;
        let priority = entity
            .priority_id
            .parse::<TicketPriority>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse task priority: {}", e)))?;

        Ok(Self {
            id: entity.id,
            organization_id: entity.organization_id,
            title: entity.title,
            description: entity.description,
            frequency,
            start_date: entity.start_date,
            next_run_at: entity.next_run_at,
            created_by: entity.created_by,
            assignee_user_id: entity.assignee_user_id,
            priority,
            location: entity.location,
            enabled: entity.enabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ScheduledTaskDto {
        ScheduledTaskDto {
            id: self.id,
            organization_id: self.organization_id,
            title: self.title,
            description: self.description,
            frequency: self.frequency.to_string(),
            start_date: self.start_date,
            next_run_at: self.next_run_at,
            created_by: self.created_by,
            assignee_user_id: self.assignee_user_id,
            priority_id: self.priority.to_string(),
            location: self.location,
            enabled: self.enabled,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScheduledTaskParams {
    pub organization_id: Uuid,
    pub title: String,
    pub description: String,
    pub frequency: String,
    pub start_date: DateTime<Utc>,
    pub created_by: Uuid,
    pub assignee_user_id: Option<Uuid>,
    pub priority_id: String,
    pub location: String,
    pub enabled: bool,
}

impl CreateScheduledTaskParams {
    pub fn from_dto(dto: CreateScheduledTaskDto, created_by: Uuid) -> Self {
        Self {
            organization_id: dto.organization_id,
            title: dto.title,
            description: dto.description,
            frequency: dto.frequency,
            start_date: dto.start_date,
            created_by,
            assignee_user_id: dto.assignee_user_id,
            priority_id: dto.priority_id,
            location: dto.location,
            enabled: dto.enabled,
        }
    }
}

/// Partial update. `assignee` uses `Some(None)` to clear the assignee.
#[derive(Debug, Clone, Default)]
pub struct UpdateScheduledTaskParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub priority_id: Option<String>,
    pub assignee: Option<Option<Uuid>>,
    pub location: Option<String>,
    pub enabled: Option<bool>,
}

impl UpdateScheduledTaskParams {
    /// A nil `assignee_user_id` clears the assignee.
    pub fn from_dto(dto: UpdateScheduledTaskDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            frequency: dto.frequency,
            start_date: dto.start_date,
            priority_id: dto.priority_id,
            assignee: dto.assignee_user_id.map(|id| (!id.is_nil()).then_some(id)),
            location: dto.location,
            enabled: dto.enabled,
        }
    }
}
