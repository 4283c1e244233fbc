//! Read-only access to an organization's non-sensitive tickets through its public
//! view token. Every lookup re-resolves the token, so disabling the view or
//! regenerating the token takes effect immediately.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        comment::CommentRepository, organization::OrganizationRepository,
        ticket::TicketRepository,
    },
    error::AppError,
    model::{
        comment::Comment,
        organization::Organization,
        ticket::{SortKey, SortOrder, TicketFilter, TicketScope, TicketWithNames},
    },
};

pub struct PublicViewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublicViewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves an enabled public view token to its organization.
    ///
    /// # Returns
    /// - `Ok(Organization)` - Organization behind the token
    /// - `Err(AppError::NotFound)` - Token unknown or public view disabled
    pub async fn organization(&self, token: &str) -> Result<Organization, AppError> {
        OrganizationRepository::new(self.db)
            .find_by_public_view_token(token)
            .await?
            .filter(|org| org.public_view_enabled)
            .ok_or_else(|| AppError::NotFound("Public view not found".to_string()))
    }

    /// Lists every non-sensitive ticket in any status, newest first.
    pub async fn tickets(&self, token: &str) -> Result<Vec<TicketWithNames>, AppError> {
        let organization = self.organization(token).await?;

        let mut filter = TicketFilter::new(TicketScope::Organization(organization.id));
        filter.sensitive = Some(false);
        filter.sort_key = SortKey::CreatedAt;
        filter.sort_order = SortOrder::Desc;

        Ok(TicketRepository::new(self.db).list(&filter).await?)
    }

    /// Gets one ticket, hiding sensitive tickets and tickets of other organizations.
    pub async fn ticket(&self, token: &str, ticket_id: Uuid) -> Result<TicketWithNames, AppError> {
        let organization = self.organization(token).await?;

        TicketRepository::new(self.db)
            .find_with_names(ticket_id)
            .await?
            .filter(|t| t.ticket.organization_id == organization.id && !t.ticket.sensitive)
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))
    }

    /// Lists the non-sensitive comments of a publicly visible ticket, oldest first.
    pub async fn comments(&self, token: &str, ticket_id: Uuid) -> Result<Vec<Comment>, AppError> {
        let ticket = self.ticket(token, ticket_id).await?;

        Ok(CommentRepository::new(self.db)
            .list_for_ticket(ticket.ticket.id, false)
            .await?)
    }
}
