use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::scheduled_task::{ScheduledTaskRecord, ScheduledTaskRepository},
    error::AppError,
    model::{
        scheduled_task::{
            CreateScheduledTaskParams, Frequency, ScheduledTask, UpdateScheduledTaskParams,
        },
        ticket::{validate_title, TicketPriority},
    },
    util::recurrence::next_run,
};

pub struct ScheduledTaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduledTaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a task and computes its first `next_run_at`.
    pub async fn create(
        &self,
        params: CreateScheduledTaskParams,
    ) -> Result<ScheduledTask, AppError> {
        validate_title(&params.title)?;
        let frequency = params.frequency.parse::<Frequency>()?;
        let priority = params.priority_id.parse::<TicketPriority>()?;
        let next_run_at = next_run(params.start_date, frequency, Utc::now())?;

        let task = ScheduledTaskRepository::new(self.db)
            .create(ScheduledTaskRecord {
                organization_id: params.organization_id,
                title: params.title,
                description: params.description,
                frequency,
                start_date: params.start_date,
                next_run_at,
                created_by: params.created_by,
                assignee_user_id: params.assignee_user_id,
                priority,
                location: params.location,
                enabled: params.enabled,
            })
            .await?;

        Ok(task)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<ScheduledTask>, AppError> {
        Ok(ScheduledTaskRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn list(&self, organization_id: Uuid) -> Result<Vec<ScheduledTask>, AppError> {
        Ok(ScheduledTaskRepository::new(self.db)
            .list_for_organization(organization_id)
            .await?)
    }

    /// Applies a partial update. `next_run_at` is recomputed only when the frequency
    /// or start date is part of the update.
    ///
    /// # Returns
    /// - `Ok(ScheduledTask)` - The updated task
    /// - `Err(AppError::NotFound)` - No task with that id
    /// - `Err(AppError::BadRequest)` - A provided value failed validation
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateScheduledTaskParams,
    ) -> Result<ScheduledTask, AppError> {
        let repo = ScheduledTaskRepository::new(self.db);

        let task = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Scheduled task not found".to_string()))?;

        if let Some(title) = &params.title {
            validate_title(title)?;
        }
        let frequency = match &params.frequency {
            Some(value) => value.parse::<Frequency>()?,
            None => task.frequency,
        };
        let priority = match &params.priority_id {
            Some(value) => value.parse::<TicketPriority>()?,
            None => task.priority,
        };
        let start_date = params.start_date.unwrap_or(task.start_date);

        let next_run_at = if params.frequency.is_some() || params.start_date.is_some() {
            next_run(start_date, frequency, Utc::now())?
        } else {
            task.next_run_at
        };

        let updated = repo
            .update(
                id,
                ScheduledTaskRecord {
                    organization_id: task.organization_id,
                    title: params.title.unwrap_or(task.title),
                    description: params.description.unwrap_or(task.description),
                    frequency,
                    start_date,
                    next_run_at,
                    created_by: task.created_by,
                    assignee_user_id: params.assignee.unwrap_or(task.assignee_user_id),
                    priority,
                    location: params.location.unwrap_or(task.location),
                    enabled: params.enabled.unwrap_or(task.enabled),
                },
            )
            .await?;

        Ok(updated)
    }

    /// Returns false when the task did not exist.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(ScheduledTaskRepository::new(self.db).delete(id).await?)
    }
}
