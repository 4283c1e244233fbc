use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        organization::{
            AddMemberDto, CreateOrganizationDto, MemberDto, OrganizationDto,
            PublicViewSettingsDto, ShareSettingsDto, ToggleSettingDto, UpdateMemberRoleDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthUser,
        },
        model::{organization::Organization, user::User},
        service::organization::{OrganizationService, PublicLink},
        state::AppState,
    },
};

/// Tag for grouping organization endpoints in OpenAPI documentation
pub static ORGANIZATION_TAG: &str = "organization";

fn settings_response(organization: &Organization, link: PublicLink) -> Response {
    match link {
        PublicLink::Share => (StatusCode::OK, Json(organization.share_settings_dto())).into_response(),
        PublicLink::PublicView => {
            (StatusCode::OK, Json(organization.public_view_settings_dto())).into_response()
        }
    }
}

/// Create an organization owned by the caller.
///
/// The organization and the caller's `owner` membership are written atomically.
/// Without a slug one is generated from the name.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The new organization
/// - `400 Bad Request` - Blank name
#[utoipa::path(
    post,
    path = "/api/organizations",
    tag = ORGANIZATION_TAG,
    request_body = CreateOrganizationDto,
    responses(
        (status = 201, description = "Organization created", body = OrganizationDto),
        (status = 400, description = "Invalid organization data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_organization(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateOrganizationDto>,
) -> Result<impl IntoResponse, AppError> {
    let organization = OrganizationService::new(&state.db)
        .create(payload.name, payload.slug, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(organization.into_dto())))
}

/// List an organization's members.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the organization
#[utoipa::path(
    get,
    path = "/api/organizations/{id}/members",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Members", body = Vec<MemberDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_members(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OrgMember(id)])
        .await?;

    let members = OrganizationService::new(&state.db).list_members(id).await?;

    let members: Vec<MemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Add a registered user to an organization as a `member`.
///
/// # Access Control
/// - `OrgManager` - Caller must be an owner or admin of the organization
///
/// # Returns
/// - `201 Created` - The new member
/// - `400 Bad Request` - Already a member
/// - `403 Forbidden` - Caller cannot manage the organization
/// - `404 Not Found` - No user with that email has signed in
#[utoipa::path(
    post,
    path = "/api/organizations/{id}/members",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    request_body = AddMemberDto,
    responses(
        (status = 201, description = "Member added", body = MemberDto),
        (status = 400, description = "Already a member", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Owner or admin role required", body = ErrorDto),
        (status = 404, description = "User must register first", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_member(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OrgManager(id)])
        .await?;

    let member = OrganizationService::new(&state.db)
        .add_member(id, &payload.email)
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Remove a member from an organization.
///
/// # Access Control
/// - Any member may remove themselves
/// - `OrgManager` - Removing someone else requires owner or admin
///
/// # Returns
/// - `204 No Content` - Member removed
/// - `400 Bad Request` - Would remove the last owner
/// - `403 Forbidden` - Not allowed to remove this member
/// - `404 Not Found` - Not a member
#[utoipa::path(
    delete,
    path = "/api/organizations/{id}/members/{user_id}",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID"),
        ("user_id" = Uuid, Path, description = "Member user ID")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 400, description = "Organization must retain at least one owner", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to remove this member", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let permission = if member_id == user.id {
        Permission::OrgMember(id)
    } else {
        Permission::OrgManager(id)
    };

    AuthGuard::new(&state.db, &user)
        .require(&[permission])
        .await?;

    OrganizationService::new(&state.db)
        .remove_member(id, member_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change a member's organization role.
///
/// # Access Control
/// - `OrgManager` - Caller must be an owner or admin of the organization
///
/// # Returns
/// - `200 OK` - Updated member
/// - `400 Bad Request` - Unknown role, or would demote the last owner
/// - `404 Not Found` - Not a member
#[utoipa::path(
    put,
    path = "/api/organizations/{id}/members/{user_id}/role",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID"),
        ("user_id" = Uuid, Path, description = "Member user ID")
    ),
    request_body = UpdateMemberRoleDto,
    responses(
        (status = 200, description = "Role updated", body = MemberDto),
        (status = 400, description = "Invalid role or last owner", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Owner or admin role required", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_role(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id, member_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateMemberRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OrgManager(id)])
        .await?;

    let member = OrganizationService::new(&state.db)
        .update_member_role(id, member_id, &payload.role)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

async fn get_link_settings(
    state: &AppState,
    user: &User,
    id: Uuid,
    link: PublicLink,
) -> Result<Response, AppError> {
    AuthGuard::new(&state.db, user)
        .require(&[Permission::OrgMember(id)])
        .await?;

    let organization = OrganizationService::new(&state.db)
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))?;

    Ok(settings_response(&organization, link))
}

async fn set_link_enabled(
    state: &AppState,
    user: &User,
    id: Uuid,
    link: PublicLink,
    enabled: bool,
) -> Result<Response, AppError> {
    AuthGuard::new(&state.db, user)
        .require(&[Permission::OrgManager(id)])
        .await?;

    let organization = OrganizationService::new(&state.db)
        .set_link_enabled(id, link, enabled)
        .await?;

    Ok(settings_response(&organization, link))
}

async fn regenerate_link(
    state: &AppState,
    user: &User,
    id: Uuid,
    link: PublicLink,
) -> Result<Response, AppError> {
    AuthGuard::new(&state.db, user)
        .require(&[Permission::OrgManager(id)])
        .await?;

    let organization = OrganizationService::new(&state.db)
        .regenerate_link(id, link)
        .await?;

    Ok(settings_response(&organization, link))
}

/// Get share link settings.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the organization
#[utoipa::path(
    get,
    path = "/api/organizations/{id}/share",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Share link settings", body = ShareSettingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_share_settings(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    get_link_settings(&state, &user, id, PublicLink::Share).await
}

/// Enable or disable the share link. Enabling issues a token if none exists.
///
/// # Access Control
/// - `OrgManager` - Caller must be an owner or admin of the organization
#[utoipa::path(
    put,
    path = "/api/organizations/{id}/share",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    request_body = ToggleSettingDto,
    responses(
        (status = 200, description = "Share link settings", body = ShareSettingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Owner or admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_share_settings(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ToggleSettingDto>,
) -> Result<Response, AppError> {
    set_link_enabled(&state, &user, id, PublicLink::Share, payload.enabled).await
}

/// Replace the share link token, invalidating the previous link.
///
/// # Access Control
/// - `OrgManager` - Caller must be an owner or admin of the organization
#[utoipa::path(
    post,
    path = "/api/organizations/{id}/share/regenerate",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Share link settings", body = ShareSettingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Owner or admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn regenerate_share_token(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    regenerate_link(&state, &user, id, PublicLink::Share).await
}

/// Get public view settings.
///
/// # Access Control
/// - `OrgMember` - Caller must belong to the organization
#[utoipa::path(
    get,
    path = "/api/organizations/{id}/public-view",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Public view settings", body = PublicViewSettingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_view_settings(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    get_link_settings(&state, &user, id, PublicLink::PublicView).await
}

/// Enable or disable the public view. Enabling issues a token if none exists.
///
/// # Access Control
/// - `OrgManager` - Caller must be an owner or admin of the organization
#[utoipa::path(
    put,
    path = "/api/organizations/{id}/public-view",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    request_body = ToggleSettingDto,
    responses(
        (status = 200, description = "Public view settings", body = PublicViewSettingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Owner or admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_public_view_settings(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ToggleSettingDto>,
) -> Result<Response, AppError> {
    set_link_enabled(&state, &user, id, PublicLink::PublicView, payload.enabled).await
}

/// Replace the public view token, invalidating the previous link.
///
/// # Access Control
/// - `OrgManager` - Caller must be an owner or admin of the organization
#[utoipa::path(
    post,
    path = "/api/organizations/{id}/public-view/regenerate",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Public view settings", body = PublicViewSettingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Owner or admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn regenerate_public_view_token(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    regenerate_link(&state, &user, id, PublicLink::PublicView).await
}
