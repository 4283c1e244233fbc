use crate::server::{
    data::scheduled_task::{ScheduledTaskRecord, ScheduledTaskRepository},
    model::{scheduled_task::Frequency, ticket::TicketPriority},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod list_for_organization;
mod update;

fn record(organization_id: Uuid, created_by: Uuid) -> ScheduledTaskRecord {
    let start = Utc.with_ymd_and_hms(2030, 1, 15, 9, 0, 0).unwrap();
    ScheduledTaskRecord {
        organization_id,
        title: "Rotate backup tapes".to_string(),
        description: "Swap the offsite set".to_string(),
        frequency: Frequency::Weekly,
        start_date: start,
        next_run_at: start,
        created_by,
        assignee_user_id: None,
        priority: TicketPriority::Medium,
        location: "Server Room".to_string(),
        enabled: true,
    }
}
