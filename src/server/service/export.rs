use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{organization::OrganizationRepository, ticket::TicketRepository},
    error::AppError,
    model::{
        ticket::{SortKey, SortOrder, TicketFilter, TicketScope, TicketWithNames},
        user::User,
    },
    util::csv::{sanitize_cell, CsvWriter},
};

const HEADER: [&str; 8] = [
    "ID",
    "Organization ID",
    "Title",
    "Status",
    "Priority",
    "Reporter ID",
    "Created At",
    "Description",
];

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Renders tickets from the caller's organizations as CSV, newest first.
    ///
    /// # Access Control
    /// - Caller must hold the global `admin` role
    /// - Export never leaves the caller's memberships; a requested organization outside
    ///   them is rejected
    ///
    /// # Arguments
    /// - `user` - Authenticated caller
    /// - `organization_id` - Optional single organization to export
    ///
    /// # Returns
    /// - `Ok(String)` - CSV document, header only when there is nothing to export
    /// - `Err(AppError::Forbidden)` - Caller is not an admin or not a member of the
    ///   requested organization
    pub async fn tickets_csv(
        &self,
        user: &User,
        organization_id: Option<Uuid>,
    ) -> Result<String, AppError> {
        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin role required".to_string()));
        }

        let member_of = OrganizationRepository::new(self.db)
            .ids_for_user(user.id)
            .await?;

        let scope = match organization_id {
            Some(id) if member_of.contains(&id) => vec![id],
            Some(id) => {
                tracing::warn!(
                    "User {} attempted to export organization {} without membership",
                    user.id,
                    id
                );
                return Err(AppError::Forbidden(
                    "Not a member of this organization".to_string(),
                ));
            }
            None => member_of,
        };

        let tickets = if scope.is_empty() {
            Vec::new()
        } else {
            let mut filter = TicketFilter::new(TicketScope::Organizations(scope));
            filter.sort_key = SortKey::CreatedAt;
            filter.sort_order = SortOrder::Desc;

            TicketRepository::new(self.db).list(&filter).await?
        };

        Ok(render(&tickets))
    }
}

fn render(tickets: &[TicketWithNames]) -> String {
    let mut writer = CsvWriter::new();
    writer.write_record(HEADER);

    for row in tickets {
        let ticket = &row.ticket;
        writer.write_record([
            ticket.id.to_string(),
            ticket.organization_id.to_string(),
            sanitize_cell(&ticket.title),
            ticket.status.to_string(),
            ticket.priority.to_string(),
            ticket.reporter_id.to_string(),
            ticket.created_at.to_rfc3339(),
            sanitize_cell(&ticket.description),
        ]);
    }

    writer.into_string()
}
