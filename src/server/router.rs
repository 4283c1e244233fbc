//! Route table, middleware stack and OpenAPI document.

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto},
        health::HealthDto,
        organization::{
            AddMemberDto, CreateOrganizationDto, MemberDto, OrganizationDto,
            PublicOrganizationDto, PublicViewSettingsDto, ShareSettingsDto, ToggleSettingDto,
            UpdateMemberRoleDto,
        },
        scheduled_task::{CreateScheduledTaskDto, ScheduledTaskDto, UpdateScheduledTaskDto},
        ticket::{
            CreateTicketDto, PublicTicketDto, PublicTicketSubmissionDto, TicketDetailDto,
            TicketDto, TicketFileDto, TicketListItemDto, UpdateTicketDto,
        },
        user::{MeDto, UserDto, UserOrganizationDto, UserSummaryDto},
    },
    server::{
        controller::{
            admin, auth, comment, health, organization, public, scheduled_task, ticket, user,
        },
        middleware::{security::with_security_headers, session::require_session},
        state::AppState,
    },
};

/// Upper bound on request bodies, attachments included.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "opsdeck", description = "Multi-tenant IT ticketing API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        health::health,
        user::get_me,
        admin::export_tickets,
        ticket::create_ticket,
        ticket::list_tickets,
        ticket::get_ticket,
        ticket::update_ticket,
        ticket::download_file,
        comment::create_comment,
        comment::list_comments,
        scheduled_task::list_scheduled_tasks,
        scheduled_task::create_scheduled_task,
        scheduled_task::update_scheduled_task,
        scheduled_task::delete_scheduled_task,
        organization::create_organization,
        organization::list_members,
        organization::add_member,
        organization::remove_member,
        organization::update_member_role,
        organization::get_share_settings,
        organization::update_share_settings,
        organization::regenerate_share_token,
        organization::get_public_view_settings,
        organization::update_public_view_settings,
        organization::regenerate_public_view_token,
        public::submit_ticket,
        public::get_organization,
        public::list_tickets,
        public::get_ticket,
        public::list_comments,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        UserDto,
        UserSummaryDto,
        UserOrganizationDto,
        MeDto,
        OrganizationDto,
        CreateOrganizationDto,
        MemberDto,
        AddMemberDto,
        UpdateMemberRoleDto,
        ShareSettingsDto,
        PublicViewSettingsDto,
        ToggleSettingDto,
        PublicOrganizationDto,
        TicketDto,
        TicketListItemDto,
        TicketDetailDto,
        TicketFileDto,
        PublicTicketDto,
        CreateTicketDto,
        UpdateTicketDto,
        PublicTicketSubmissionDto,
        CommentDto,
        CreateCommentDto,
        ScheduledTaskDto,
        CreateScheduledTaskDto,
        UpdateScheduledTaskDto,
    ))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Unknown paths fall through to the single-page app in `static_dir`, serving
/// `index.html` for anything that is not a file on disk.
pub fn router(state: AppState, static_dir: &str) -> Router {
    let protected = Router::new()
        .route("/api/me", get(user::get_me))
        .route("/api/admin/export/tickets", get(admin::export_tickets))
        .route(
            "/api/tickets",
            post(ticket::create_ticket).get(ticket::list_tickets),
        )
        .route(
            "/api/tickets/{id}",
            get(ticket::get_ticket).patch(ticket::update_ticket),
        )
        .route(
            "/api/tickets/{id}/files/{file_id}",
            get(ticket::download_file),
        )
        .route(
            "/api/tickets/{id}/comments",
            post(comment::create_comment).get(comment::list_comments),
        )
        .route(
            "/api/scheduled-tasks",
            get(scheduled_task::list_scheduled_tasks).post(scheduled_task::create_scheduled_task),
        )
        .route(
            "/api/scheduled-tasks/{id}",
            patch(scheduled_task::update_scheduled_task)
                .delete(scheduled_task::delete_scheduled_task),
        )
        .route("/api/organizations", post(organization::create_organization))
        .route(
            "/api/organizations/{id}/members",
            get(organization::list_members).post(organization::add_member),
        )
        .route(
            "/api/organizations/{id}/members/{user_id}",
            delete(organization::remove_member),
        )
        .route(
            "/api/organizations/{id}/members/{user_id}/role",
            put(organization::update_member_role),
        )
        .route(
            "/api/organizations/{id}/share",
            get(organization::get_share_settings).put(organization::update_share_settings),
        )
        .route(
            "/api/organizations/{id}/share/regenerate",
            post(organization::regenerate_share_token),
        )
        .route(
            "/api/organizations/{id}/public-view",
            get(organization::get_public_view_settings)
                .put(organization::update_public_view_settings),
        )
        .route(
            "/api/organizations/{id}/public-view/regenerate",
            post(organization::regenerate_public_view_token),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    let public = Router::new()
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
        .route("/auth/logout", post(auth::logout))
        .route("/api/health", get(health::health))
        .route("/api/public/tickets", post(public::submit_ticket))
        .route(
            "/api/public/view/{token}/organization",
            get(public::get_organization),
        )
        .route("/api/public/view/{token}/tickets", get(public::list_tickets))
        .route(
            "/api/public/view/{token}/tickets/{ticket_id}",
            get(public::get_ticket),
        )
        .route(
            "/api/public/view/{token}/tickets/{ticket_id}/comments",
            get(public::list_comments),
        );

    let index = Path::new(static_dir).join("index.html");
    let spa = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    let app = Router::new()
        .merge(protected)
        .merge(public)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(spa)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    with_security_headers(app)
}
