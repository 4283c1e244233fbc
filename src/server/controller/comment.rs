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
        comment::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthUser,
        },
        model::{comment::CreateCommentParams, user::User},
        service::{comment::CommentService, ticket::TicketService},
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

async fn require_ticket_member(
    state: &AppState,
    user: &User,
    ticket_id: Uuid,
) -> Result<(), AppError> {
    let ticket = TicketService::new(&state.db)
        .get(ticket_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

    AuthGuard::new(&state.db, user)
        .require(&[Permission::OrgMember(ticket.organization_id)])
        .await
}

/// Add a comment to a ticket.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the ticket's organization
///
/// # Returns
/// - `201 Created` - Comment with author summary
/// - `400 Bad Request` - Blank body
/// - `403 Forbidden` - Not a member of the ticket's organization
/// - `404 Not Found` - No such ticket
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Blank comment", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    require_ticket_member(&state, &user, id).await?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParams {
            ticket_id: id,
            user_id: user.id,
            body: payload.body,
            sensitive: payload.sensitive,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// List a ticket's comments, sensitive ones included, oldest first.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the ticket's organization
#[utoipa::path(
    get,
    path = "/api/tickets/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Comments", body = Vec<CommentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    require_ticket_member(&state, &user, id).await?;

    let comments = CommentService::new(&state.db).list(id, true).await?;

    let comments: Vec<CommentDto> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(comments)))
}
