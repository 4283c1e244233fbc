//! Scheduled task factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for recurring task templates.
///
/// Defaults to a weekly, enabled, medium-priority task starting and next running now.
pub struct ScheduledTaskFactory<'a> {
    db: &'a DatabaseConnection,
    organization_id: Uuid,
    created_by: Uuid,
    title: String,
    frequency: String,
    start_date: DateTime<Utc>,
    next_run_at: DateTime<Utc>,
    enabled: bool,
}

impl<'a> ScheduledTaskFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, organization_id: Uuid, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            db,
            organization_id,
            created_by,
            title: format!("Task {}", next_id()),
            frequency: "weekly".to_string(),
            start_date: now,
            next_run_at: now,
            enabled: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn next_run_at(mut self, next_run_at: DateTime<Utc>) -> Self {
        self.next_run_at = next_run_at;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub async fn build(self) -> Result<entity::scheduled_task::Model, DbErr> {
        let now = Utc::now();
        entity::scheduled_task::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            organization_id: ActiveValue::Set(self.organization_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            frequency: ActiveValue::Set(self.frequency),
            start_date: ActiveValue::Set(self.start_date),
            next_run_at: ActiveValue::Set(self.next_run_at),
            created_by: ActiveValue::Set(self.created_by),
            assignee_user_id: ActiveValue::Set(None),
            priority_id: ActiveValue::Set("medium".to_string()),
            location: ActiveValue::Set(String::new()),
            enabled: ActiveValue::Set(self.enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_scheduled_task(
    db: &DatabaseConnection,
    organization_id: Uuid,
    created_by: Uuid,
) -> Result<entity::scheduled_task::Model, DbErr> {
    ScheduledTaskFactory::new(db, organization_id, created_by)
        .build()
        .await
}
