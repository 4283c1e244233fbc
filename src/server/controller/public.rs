use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        comment::CommentDto,
        organization::PublicOrganizationDto,
        ticket::{PublicTicketDto, PublicTicketSubmissionDto, TicketDto},
    },
    server::{
        error::AppError,
        model::ticket::PublicSubmissionParams,
        service::{public_view::PublicViewService, ticket::TicketService},
        state::AppState,
        util::form::JsonOrForm,
    },
};

/// Tag for grouping unauthenticated endpoints in OpenAPI documentation
pub static PUBLIC_TAG: &str = "public";

/// Submit a ticket through an organization's share link.
///
/// Accepts JSON or `multipart/form-data` with `files` parts. The submitter is
/// matched by email or registered with the `public` role.
///
/// # Returns
/// - `201 Created` - The new ticket
/// - `400 Bad Request` - Invalid title, description, name, email or priority
/// - `403 Forbidden` - Unknown token or share link disabled
/// - `413 Payload Too Large` - Body over the upload limit
#[utoipa::path(
    post,
    path = "/api/public/tickets",
    tag = PUBLIC_TAG,
    request_body = PublicTicketSubmissionDto,
    responses(
        (status = 201, description = "Ticket submitted", body = TicketDto),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 403, description = "Invalid or disabled share link", body = ErrorDto),
        (status = 413, description = "Request body too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_ticket(
    State(state): State<AppState>,
    body: JsonOrForm<PublicTicketSubmissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = match body {
        JsonOrForm::Json(dto) => PublicSubmissionParams::from_dto(dto),
        JsonOrForm::Form(form) => PublicSubmissionParams::from_form(form),
    };

    let ticket = TicketService::new(&state.db).submit_public(params).await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}

/// Get the organization behind a public view token.
#[utoipa::path(
    get,
    path = "/api/public/view/{token}/organization",
    tag = PUBLIC_TAG,
    params(
        ("token" = String, Path, description = "Public view token")
    ),
    responses(
        (status = 200, description = "Organization", body = PublicOrganizationDto),
        (status = 404, description = "Unknown token or public view disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organization(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let organization = PublicViewService::new(&state.db)
        .organization(&token)
        .await?;

    Ok((StatusCode::OK, Json(organization.into_public_dto())))
}

/// List the organization's non-sensitive tickets in every status, newest first.
#[utoipa::path(
    get,
    path = "/api/public/view/{token}/tickets",
    tag = PUBLIC_TAG,
    params(
        ("token" = String, Path, description = "Public view token")
    ),
    responses(
        (status = 200, description = "Tickets", body = Vec<PublicTicketDto>),
        (status = 404, description = "Unknown token or public view disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tickets = PublicViewService::new(&state.db).tickets(&token).await?;

    let tickets: Vec<PublicTicketDto> = tickets
        .into_iter()
        .map(|t| t.into_public_dto(false))
        .collect();

    Ok((StatusCode::OK, Json(tickets)))
}

/// Get one non-sensitive ticket of the organization.
#[utoipa::path(
    get,
    path = "/api/public/view/{token}/tickets/{ticket_id}",
    tag = PUBLIC_TAG,
    params(
        ("token" = String, Path, description = "Public view token"),
        ("ticket_id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket", body = PublicTicketDto),
        (status = 404, description = "Ticket not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path((token, ticket_id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = PublicViewService::new(&state.db)
        .ticket(&token, ticket_id)
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_public_dto(true))))
}

/// List a visible ticket's non-sensitive comments, oldest first.
#[utoipa::path(
    get,
    path = "/api/public/view/{token}/tickets/{ticket_id}/comments",
    tag = PUBLIC_TAG,
    params(
        ("token" = String, Path, description = "Public view token"),
        ("ticket_id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Comments", body = Vec<CommentDto>),
        (status = 404, description = "Ticket not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Path((token, ticket_id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let comments = PublicViewService::new(&state.db)
        .comments(&token, ticket_id)
        .await?;

    let comments: Vec<CommentDto> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(comments)))
}
