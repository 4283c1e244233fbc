use crate::server::{
    data::{ticket::TicketRepository, ticket_file::TicketFileRepository},
    model::{
        file::NewTicketFile,
        ticket::{
            CreateTicketParams, SortKey, SortOrder, TicketChanges, TicketFilter, TicketPriority,
            TicketScope, TicketStatus,
        },
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod files;
mod list;
mod update;

fn create_params(organization_id: Uuid, reporter_id: Uuid) -> CreateTicketParams {
    CreateTicketParams {
        organization_id,
        title: "Printer jammed".to_string(),
        description: "Paper stuck in tray 2".to_string(),
        location: "Main Office".to_string(),
        priority_id: "high".to_string(),
        reporter_id,
        assignee_user_id: None,
        sensitive: false,
        files: Vec::new(),
    }
}
