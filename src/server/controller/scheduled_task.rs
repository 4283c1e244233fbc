use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        scheduled_task::{CreateScheduledTaskDto, ScheduledTaskDto, UpdateScheduledTaskDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthUser,
        },
        model::{
            scheduled_task::{
                CreateScheduledTaskParams, ScheduledTask, UpdateScheduledTaskParams,
            },
            user::User,
        },
        service::scheduled_task::ScheduledTaskService,
        state::AppState,
    },
};

/// Tag for grouping scheduled task endpoints in OpenAPI documentation
pub static SCHEDULED_TASK_TAG: &str = "scheduled-task";

#[derive(Debug, Deserialize, IntoParams)]
pub struct ScheduledTaskListQuery {
    pub organization_id: Uuid,
}

async fn load_for_member(
    state: &AppState,
    user: &User,
    id: Uuid,
) -> Result<ScheduledTask, AppError> {
    let task = ScheduledTaskService::new(&state.db)
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Scheduled task not found".to_string()))?;

    AuthGuard::new(&state.db, user)
        .require(&[Permission::OrgMember(task.organization_id)])
        .await?;

    Ok(task)
}

/// List an organization's scheduled tasks, soonest `next_run_at` first.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to `organization_id`
#[utoipa::path(
    get,
    path = "/api/scheduled-tasks",
    tag = SCHEDULED_TASK_TAG,
    params(ScheduledTaskListQuery),
    responses(
        (status = 200, description = "Scheduled tasks", body = Vec<ScheduledTaskDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_scheduled_tasks(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<ScheduledTaskListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OrgMember(query.organization_id)])
        .await?;

    let tasks = ScheduledTaskService::new(&state.db)
        .list(query.organization_id)
        .await?;

    let tasks: Vec<ScheduledTaskDto> = tasks.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(tasks)))
}

/// Create a scheduled task.
///
/// `next_run_at` is the first occurrence of the recurrence strictly after now.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to `organization_id`
///
/// # Returns
/// - `201 Created` - The new task
/// - `400 Bad Request` - Invalid title, frequency or priority
/// - `403 Forbidden` - Not a member of the organization
#[utoipa::path(
    post,
    path = "/api/scheduled-tasks",
    tag = SCHEDULED_TASK_TAG,
    request_body = CreateScheduledTaskDto,
    responses(
        (status = 201, description = "Scheduled task created", body = ScheduledTaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_scheduled_task(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateScheduledTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OrgMember(payload.organization_id)])
        .await?;

    let task = ScheduledTaskService::new(&state.db)
        .create(CreateScheduledTaskParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// Partially update a scheduled task.
///
/// `next_run_at` is recomputed only when `frequency` or `start_date` is present.
/// A nil `assignee_user_id` unassigns the task.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the task's organization
#[utoipa::path(
    patch,
    path = "/api/scheduled-tasks/{id}",
    tag = SCHEDULED_TASK_TAG,
    params(
        ("id" = Uuid, Path, description = "Scheduled task ID")
    ),
    request_body = UpdateScheduledTaskDto,
    responses(
        (status = 200, description = "Scheduled task updated", body = ScheduledTaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Scheduled task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_scheduled_task(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScheduledTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    load_for_member(&state, &user, id).await?;

    let task = ScheduledTaskService::new(&state.db)
        .update(id, UpdateScheduledTaskParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Delete a scheduled task.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the task's organization
#[utoipa::path(
    delete,
    path = "/api/scheduled-tasks/{id}",
    tag = SCHEDULED_TASK_TAG,
    params(
        ("id" = Uuid, Path, description = "Scheduled task ID")
    ),
    responses(
        (status = 204, description = "Scheduled task deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Scheduled task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_scheduled_task(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    load_for_member(&state, &user, id).await?;

    let deleted = ScheduledTaskService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("Scheduled task not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
