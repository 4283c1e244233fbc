use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{
            expired_cookie, oauth_state_cookie, session_cookie, OAUTH_STATE_COOKIE,
            SESSION_COOKIE,
        },
        service::auth::AuthService,
        state::AppState,
        util::token::generate_token,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// State token that must match the `oauth_state` cookie.
    #[serde(default)]
    pub state: String,
    /// Authorization code to exchange for tokens.
    pub code: String,
}

/// Start the OAuth2 login flow.
///
/// Stores a random state in a short-lived cookie and redirects to the identity
/// provider.
///
/// # Returns
/// - `307 Temporary Redirect` - To the provider authorization page
#[utoipa::path(
    get,
    path = "/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the identity provider")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    let csrf_state = generate_token();
    let url = auth_service.login_url(csrf_state.clone());

    let jar = jar.add(oauth_state_cookie(csrf_state, state.secure_cookies));

    Ok((jar, Redirect::temporary(url.as_str())))
}

/// Complete the OAuth2 login flow.
///
/// Verifies the state against the `oauth_state` cookie, exchanges the code,
/// provisions the user on first login and issues the signed session cookie.
///
/// # Returns
/// - `307 Temporary Redirect` - To `/` with the session cookie set
/// - `400 Bad Request` - Missing or mismatched state
/// - `500 Internal Server Error` - Token exchange, userinfo or database failure
#[utoipa::path(
    get,
    path = "/auth/callback",
    tag = AUTH_TAG,
    params(
        ("code" = String, Query, description = "Authorization code"),
        ("state" = String, Query, description = "State issued by /auth/login")
    ),
    responses(
        (status = 307, description = "Signed in, redirect to /"),
        (status = 400, description = "State validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_state(&jar, &params.state)?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    let user = auth_service.callback(params.code).await?;

    let jar = jar
        .add(expired_cookie(OAUTH_STATE_COOKIE, state.secure_cookies))
        .add(session_cookie(
            state.session_signer.sign(user.id),
            state.secure_cookies,
        ));

    Ok((jar, Redirect::temporary("/")))
}

/// Sign out by expiring the session cookie.
///
/// # Returns
/// - `200 OK` - Session cookie cleared
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out")
    ),
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(expired_cookie(SESSION_COOKIE, state.secure_cookies));

    (jar, StatusCode::OK)
}

fn validate_state(jar: &CookieJar, csrf_state: &str) -> Result<(), AppError> {
    match jar.get(OAUTH_STATE_COOKIE) {
        Some(cookie) if !csrf_state.is_empty() && cookie.value() == csrf_state => Ok(()),
        _ => {
            tracing::debug!("OAuth callback state did not match the state cookie");
            Err(AuthError::CsrfValidationFailed.into())
        }
    }
}
