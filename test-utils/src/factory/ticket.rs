//! Ticket factory for creating test ticket entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test tickets.
///
/// # Example
///
/// ```rust,ignore
/// let ticket = TicketFactory::new(&db, org.id, reporter.id)
///     .title("Printer jammed")
///     .status("in_progress")
///     .assignee(Some(tech.id))
///     .build()
///     .await?;
/// ```
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    organization_id: Uuid,
    reporter_id: Uuid,
    title: String,
    description: String,
    location: String,
    status: String,
    priority: String,
    assignee_user_id: Option<Uuid>,
    sensitive: bool,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> TicketFactory<'a> {
    /// Defaults:
    /// - title: `"Ticket {id}"`
    /// - description: `"Test ticket description"`
    /// - status: `"new"`, priority: `"medium"`
    /// - unassigned, not sensitive, created now
    pub fn new(db: &'a DatabaseConnection, organization_id: Uuid, reporter_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            organization_id,
            reporter_id,
            title: format!("Ticket {}", id),
            description: "Test ticket description".to_string(),
            location: String::new(),
            status: "new".to_string(),
            priority: "medium".to_string(),
            assignee_user_id: None,
            sensitive: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn assignee(mut self, assignee_user_id: Option<Uuid>) -> Self {
        self.assignee_user_id = assignee_user_id;
        self
    }

    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Overrides the creation timestamp, for ordering and date-range tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn completed_at(mut self, completed_at: Option<DateTime<Utc>>) -> Self {
        self.completed_at = completed_at;
        self
    }

    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            organization_id: ActiveValue::Set(self.organization_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            location: ActiveValue::Set(self.location),
            status_id: ActiveValue::Set(self.status),
            priority_id: ActiveValue::Set(self.priority),
            reporter_id: ActiveValue::Set(self.reporter_id),
            assignee_user_id: ActiveValue::Set(self.assignee_user_id),
            sensitive: ActiveValue::Set(self.sensitive),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            completed_at: ActiveValue::Set(self.completed_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket with default values.
pub async fn create_ticket(
    db: &DatabaseConnection,
    organization_id: Uuid,
    reporter_id: Uuid,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, organization_id, reporter_id)
        .build()
        .await
}
