use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        organization::OrganizationRepository, ticket::TicketRepository,
        ticket_file::TicketFileRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        file::{TicketFileContent, TicketFileMeta},
        ticket::{
            completed_at_after_transition, validate_description, validate_title,
            CreateTicketParams, PublicSubmissionParams, Ticket, TicketChanges, TicketFilter,
            TicketPriority, TicketStatus, TicketWithNames, UpdateTicketParams,
        },
        user::{CreateUserParams, GlobalRole},
    },
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a ticket with status `new` and stores its attachments in the same
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket
    /// - `Err(AppError::BadRequest)` - Title, description or priority invalid
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, mut params: CreateTicketParams) -> Result<Ticket, AppError> {
        validate_title(&params.title)?;
        validate_description(&params.description)?;
        let priority = params.priority_id.parse::<TicketPriority>()?;

        let files = std::mem::take(&mut params.files);

        let txn = self.db.begin().await?;
        let ticket = TicketRepository::new(&txn).create(&params, priority).await?;

        let file_repo = TicketFileRepository::new(&txn);
        for file in files {
            file_repo.create(ticket.id, file).await?;
        }
        txn.commit().await?;

        Ok(ticket)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Ticket>, AppError> {
        Ok(TicketRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets a ticket with reporter and assignee names plus attachment metadata.
    pub async fn get_detail(
        &self,
        id: Uuid,
    ) -> Result<Option<(TicketWithNames, Vec<TicketFileMeta>)>, AppError> {
        let Some(ticket) = TicketRepository::new(self.db).find_with_names(id).await? else {
            return Ok(None);
        };

        let files = TicketFileRepository::new(self.db).list_meta(id).await?;

        Ok(Some((ticket, files)))
    }

    /// Applies a partial update and re-derives `completed_at` from the status change.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The updated ticket
    /// - `Err(AppError::NotFound)` - No ticket with that id
    /// - `Err(AppError::BadRequest)` - A provided value failed validation
    pub async fn update(&self, id: Uuid, params: UpdateTicketParams) -> Result<Ticket, AppError> {
        let repo = TicketRepository::new(self.db);

        let ticket = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

        if let Some(title) = &params.title {
            validate_title(title)?;
        }
        if let Some(description) = &params.description {
            validate_description(description)?;
        }
        let priority = match &params.priority_id {
            Some(value) => value.parse::<TicketPriority>()?,
            None => ticket.priority,
        };
        let status = match &params.status_id {
            Some(value) => value.parse::<TicketStatus>()?,
            None => ticket.status,
        };

        let now = Utc::now();
        let changes = TicketChanges {
            title: params.title.unwrap_or(ticket.title),
            description: params.description.unwrap_or(ticket.description),
            location: params.location.unwrap_or(ticket.location),
            status,
            priority,
            assignee_user_id: params.assignee.unwrap_or(ticket.assignee_user_id),
            sensitive: params.sensitive.unwrap_or(ticket.sensitive),
            updated_at: now,
            completed_at: completed_at_after_transition(
                ticket.status,
                status,
                ticket.completed_at,
                now,
            ),
        };

        Ok(repo.update(id, changes).await?)
    }

    pub async fn list(&self, filter: &TicketFilter) -> Result<Vec<TicketWithNames>, AppError> {
        Ok(TicketRepository::new(self.db).list(filter).await?)
    }

    /// Gets an attachment only when it belongs to `ticket_id`.
    pub async fn get_file(
        &self,
        ticket_id: Uuid,
        file_id: Uuid,
    ) -> Result<Option<TicketFileContent>, AppError> {
        let file = TicketFileRepository::new(self.db).find_by_id(file_id).await?;

        Ok(file.filter(|f| f.ticket_id == ticket_id))
    }

    /// Creates a ticket through an organization's share link.
    ///
    /// Input is validated before the token is looked at. The reporter is found by
    /// email or created with the `public` role; the ticket is never sensitive.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket
    /// - `Err(AppError::BadRequest)` - Submission failed validation
    /// - `Err(AppError::Forbidden)` - Unknown token or sharing disabled
    pub async fn submit_public(&self, params: PublicSubmissionParams) -> Result<Ticket, AppError> {
        params.validate()?;

        let organization = OrganizationRepository::new(self.db)
            .find_by_share_token(&params.token)
            .await?
            .filter(|org| org.share_link_enabled)
            .ok_or_else(|| {
                tracing::debug!("Rejected public submission with unknown or disabled share link");
                AppError::Forbidden("Invalid or disabled share link".to_string())
            })?;

        let user_repo = UserRepository::new(self.db);
        let reporter = match user_repo.find_by_email(&params.email).await? {
            Some(user) => user,
            None => {
                user_repo
                    .create(CreateUserParams {
                        email: params.email,
                        name: params.name,
                        role: GlobalRole::Public,
                        avatar_url: String::new(),
                    })
                    .await?
            }
        };

        self.create(CreateTicketParams {
            organization_id: organization.id,
            title: params.title,
            description: params.description,
            location: String::new(),
            priority_id: params.priority_id,
            reporter_id: reporter.id,
            assignee_user_id: None,
            sensitive: false,
            files: params.files,
        })
        .await
    }
}
