//! Scheduled task data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    scheduled_task::{Frequency, ScheduledTask},
    ticket::TicketPriority,
};

/// Column values for a new or updated scheduled task, already validated.
#[derive(Debug, Clone)]
pub struct ScheduledTaskRecord {
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
}

pub struct ScheduledTaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduledTaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, record: ScheduledTaskRecord) -> Result<ScheduledTask, DbErr> {
        let now = Utc::now();
        let entity = entity::scheduled_task::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            organization_id: ActiveValue::Set(record.organization_id),
            title: ActiveValue::Set(record.title),
            description: ActiveValue::Set(record.description),
            frequency: ActiveValue::Set(record.frequency.to_string()),
            start_date: ActiveValue::Set(record.start_date),
            next_run_at: ActiveValue::Set(record.next_run_at),
            created_by: ActiveValue::Set(record.created_by),
            assignee_user_id: ActiveValue::Set(record.assignee_user_id),
            priority_id: ActiveValue::Set(record.priority.to_string()),
            location: ActiveValue::Set(record.location),
            enabled: ActiveValue::Set(record.enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        ScheduledTask::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ScheduledTask>, DbErr> {
        entity::prelude::ScheduledTask::find_by_id(id)
            .one(self.db)
            .await?
            .map(ScheduledTask::from_entity)
            .transpose()
    }

    /// Lists an organization's tasks, soonest `next_run_at` first.
    pub async fn list_for_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<ScheduledTask>, DbErr> {
        entity::prelude::ScheduledTask::find()
            .filter(entity::scheduled_task::Column::OrganizationId.eq(organization_id))
            .order_by_asc(entity::scheduled_task::Column::NextRunAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(ScheduledTask::from_entity)
            .collect()
    }

    /// Overwrites the mutable columns of a task. `organization_id` and `created_by`
    /// in the record are ignored.
    ///
    /// # Returns
    /// - `Ok(ScheduledTask)` - The updated task
    /// - `Err(DbErr::RecordNotFound)` - Task does not exist
    pub async fn update(
        &self,
        id: Uuid,
        record: ScheduledTaskRecord,
    ) -> Result<ScheduledTask, DbErr> {
        let task = entity::prelude::ScheduledTask::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Scheduled task {} not found",
                id
            )))?;

        let mut active: entity::scheduled_task::ActiveModel = task.into();
        active.title = ActiveValue::Set(record.title);
        active.description = ActiveValue::Set(record.description);
        active.frequency = ActiveValue::Set(record.frequency.to_string());
        active.start_date = ActiveValue::Set(record.start_date);
        active.next_run_at = ActiveValue::Set(record.next_run_at);
        active.assignee_user_id = ActiveValue::Set(record.assignee_user_id);
        active.priority_id = ActiveValue::Set(record.priority.to_string());
        active.location = ActiveValue::Set(record.location);
        active.enabled = ActiveValue::Set(record.enabled);
        active.updated_at = ActiveValue::Set(Utc::now());

        ScheduledTask::from_entity(active.update(self.db).await?)
    }

    /// Deletes a task.
    ///
    /// # Returns
    /// - `Ok(true)` - Task deleted
    /// - `Ok(false)` - Task did not exist
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let Some(task) = entity::prelude::ScheduledTask::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        task.delete(self.db).await?;

        Ok(true)
    }
}
