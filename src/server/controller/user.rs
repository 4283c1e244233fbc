use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::MeDto},
    server::{
        error::AppError, middleware::session::AuthUser,
        service::organization::OrganizationService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the signed-in user and their organizations.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - User profile and memberships with roles
/// - `401 Unauthorized` - No valid session
#[utoipa::path(
    get,
    path = "/api/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = MeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let organizations = OrganizationService::new(&state.db)
        .list_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MeDto {
            user: user.into_dto(),
            organizations: organizations.into_iter().map(|o| o.into_dto()).collect(),
        }),
    ))
}
