use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Query;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        ticket::{
            CreateTicketDto, TicketDetailDto, TicketDto, TicketListItemDto, UpdateTicketDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthUser,
        },
        model::ticket::{
            CreateTicketParams, SortKey, SortOrder, TicketFilter, TicketPriority, TicketScope,
            TicketStatus, UpdateTicketParams,
        },
        service::ticket::TicketService,
        state::AppState,
        util::form::JsonOrForm,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// Query parameters for listing tickets. `status` and `priority` may repeat.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TicketListQuery {
    /// Organization to list; required.
    pub organization_id: Option<Uuid>,
    /// Status filter; defaults to the active statuses.
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub priority: Vec<String>,
    /// Case-insensitive substring of title or description.
    pub search: Option<String>,
    pub assignee_id: Option<Uuid>,
    /// `created_at`, `updated_at`, `title`, `priority` or `status`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
}

impl TicketListQuery {
    fn into_filter(self) -> Result<TicketFilter, AppError> {
        let organization_id = self
            .organization_id
            .ok_or_else(|| AppError::BadRequest("organization_id is required".to_string()))?;

        let mut filter = TicketFilter::new(TicketScope::Organization(organization_id));

        filter.statuses = if self.status.is_empty() {
            TicketStatus::ACTIVE.to_vec()
        } else {
            self.status
                .iter()
                .map(|s| s.parse::<TicketStatus>())
                .collect::<Result<Vec<_>, _>>()?
        };
        filter.priorities = self
            .priority
            .iter()
            .map(|p| p.parse::<TicketPriority>())
            .collect::<Result<Vec<_>, _>>()?;
        filter.assignee_id = self.assignee_id;
        filter.keyword = self.search.filter(|s| !s.is_empty());
        filter.sort_key = SortKey::parse(self.sort_by.as_deref());
        filter.sort_order = SortOrder::parse(self.sort_order.as_deref());

        Ok(filter)
    }
}

/// Create a ticket.
///
/// Accepts JSON or `multipart/form-data`; multipart parts named `files` are stored
/// as attachments. The caller becomes the reporter and the status is always `new`.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to `organization_id`
///
/// # Returns
/// - `201 Created` - The new ticket
/// - `400 Bad Request` - Invalid title, description, priority or body
/// - `403 Forbidden` - Not a member of the organization
/// - `413 Payload Too Large` - Body over the upload limit
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = TICKET_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketDto),
        (status = 400, description = "Invalid ticket data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 413, description = "Request body too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    body: JsonOrForm<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = match body {
        JsonOrForm::Json(dto) => CreateTicketParams::from_dto(dto, user.id),
        JsonOrForm::Form(form) => CreateTicketParams::from_form(form, user.id)?,
    };

    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OrgMember(params.organization_id)])
        .await?;

    let ticket = TicketService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}

/// List tickets of an organization.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to `organization_id`
///
/// # Returns
/// - `200 OK` - Matching tickets with reporter and assignee names, description omitted
/// - `400 Bad Request` - Missing organization or unknown status/priority
/// - `403 Forbidden` - Not a member of the organization
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    params(TicketListQuery),
    responses(
        (status = 200, description = "Tickets", body = Vec<TicketListItemDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<TicketListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.into_filter()?;

    if let TicketScope::Organization(organization_id) = filter.scope {
        AuthGuard::new(&state.db, &user)
            .require(&[Permission::OrgMember(organization_id)])
            .await?;
    }

    let tickets = TicketService::new(&state.db).list(&filter).await?;

    let tickets: Vec<TicketListItemDto> = tickets
        .into_iter()
        .map(|t| t.into_list_item_dto())
        .collect();

    Ok((StatusCode::OK, Json(tickets)))
}

/// Get a ticket with names and attachment metadata.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the ticket's organization
///
/// # Returns
/// - `200 OK` - Ticket detail
/// - `403 Forbidden` - Not a member of the ticket's organization
/// - `404 Not Found` - No such ticket
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket detail", body = TicketDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (ticket, files) = TicketService::new(&state.db)
        .get_detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OrgMember(ticket.ticket.organization_id)])
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_detail_dto(files))))
}

/// Partially update a ticket.
///
/// Entering `done` or `canceled` stamps `completed_at`; moving from `done` back to
/// `new` clears it. A nil `assignee_id` unassigns the ticket.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the ticket's organization
///
/// # Returns
/// - `200 OK` - Updated ticket
/// - `400 Bad Request` - Invalid field value
/// - `403 Forbidden` - Not a member of the ticket's organization
/// - `404 Not Found` - No such ticket
#[utoipa::path(
    patch,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = TicketDto),
        (status = 400, description = "Invalid ticket data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TicketService::new(&state.db);

    let ticket = service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OrgMember(ticket.organization_id)])
        .await?;

    let updated = service
        .update(id, UpdateTicketParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Download a ticket attachment.
///
/// Images are served inline, everything else as an attachment.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the ticket's organization
///
/// # Returns
/// - `200 OK` - Raw file bytes with the stored content type
/// - `403 Forbidden` - Not a member of the ticket's organization
/// - `404 Not Found` - No such ticket, or the file belongs to another ticket
#[utoipa::path(
    get,
    path = "/api/tickets/{id}/files/{file_id}",
    tag = TICKET_TAG,
    params(
        ("id" = Uuid, Path, description = "Ticket ID"),
        ("file_id" = Uuid, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File content", content_type = "application/octet-stream"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_file(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id, file_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let service = TicketService::new(&state.db);

    let ticket = service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OrgMember(ticket.organization_id)])
        .await?;

    let file = service
        .get_file(id, file_id)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    let disposition = file.content_disposition();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.data,
    ))
}
