use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthUser,
        },
        service::export::ExportService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportQuery {
    /// Restrict the export to one of the caller's organizations.
    pub organization_id: Option<Uuid>,
}

/// Export tickets as CSV.
///
/// Covers every ticket in the caller's organizations, or the single requested one,
/// newest first. Free-text cells are neutralized against spreadsheet formulas.
///
/// # Access Control
/// - `Admin` - Global admin role required
/// - Only organizations the caller belongs to are exported
///
/// # Returns
/// - `200 OK` - `text/csv` attachment named `tickets.csv`
/// - `403 Forbidden` - Not an admin, or not a member of the requested organization
#[utoipa::path(
    get,
    path = "/api/admin/export/tickets",
    tag = ADMIN_TAG,
    params(ExportQuery),
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv", body = String),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role or membership required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_tickets(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::Admin])
        .await?;

    let csv = ExportService::new(&state.db)
        .tickets_csv(&user, query.organization_id)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"tickets.csv\"",
            ),
        ],
        csv,
    ))
}
