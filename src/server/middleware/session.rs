//! Signed session cookies.
//!
//! The `session_id` cookie carries `<user uuid>.<hex hmac-sha256 of the uuid>`. A
//! short-lived `oauth_state` cookie holds the OAuth2 state parameter between the
//! login redirect and the callback. Both are `HttpOnly`, `SameSite=Lax` and scoped to
//! `/`; the `Secure` attribute follows `AppState::secure_cookies`.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, config::ConfigError, AppError},
    model::user::User,
    state::AppState,
};

pub const SESSION_COOKIE: &str = "session_id";
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

const SESSION_MAX_AGE: time::Duration = time::Duration::hours(24);
const OAUTH_STATE_MAX_AGE: time::Duration = time::Duration::minutes(15);

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies session cookie values with a server-side secret.
#[derive(Clone)]
pub struct SessionSigner {
    mac: HmacSha256,
}

impl SessionSigner {
    /// Creates a signer keyed with `secret`.
    ///
    /// # Returns
    /// - `Ok(SessionSigner)` - Ready to sign
    /// - `Err(ConfigError::InvalidEnvVar)` - Secret is empty or unusable as a key
    pub fn new(secret: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidEnvVar {
            name: "SESSION_SECRET".to_string(),
            reason: reason.to_string(),
        };

        if secret.is_empty() {
            return Err(invalid("must not be empty"));
        }

        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| invalid(&e.to_string()))?;

        Ok(Self { mac })
    }

    pub fn sign(&self, user_id: Uuid) -> String {
        let id = user_id.to_string();

        let mut mac = self.mac.clone();
        mac.update(id.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        format!("{}.{}", id, signature)
    }

    /// Returns the user id of a correctly signed value.
    ///
    /// The value is split on its last `.` and the signature is compared in
    /// constant time before the id is parsed.
    pub fn verify(&self, value: &str) -> Option<Uuid> {
        let (id, signature) = value.rsplit_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac.clone();
        mac.update(id.as_bytes());
        mac.verify_slice(&signature).ok()?;

        Uuid::parse_str(id).ok()
    }
}

fn base_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

pub fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(SESSION_COOKIE, value, secure);
    cookie.set_max_age(SESSION_MAX_AGE);
    cookie
}

pub fn oauth_state_cookie(value: String, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(OAUTH_STATE_COOKIE, value, secure);
    cookie.set_max_age(OAUTH_STATE_MAX_AGE);
    cookie
}

/// Cookie that makes the browser drop `name` immediately.
pub fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(name, String::new(), secure);
    cookie.set_max_age(time::Duration::ZERO);
    cookie
}

/// The signed-in user, placed in request extensions by `require_session`.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AuthError::Unauthenticated.into())
    }
}

/// Rejects requests without a valid session cookie with 401.
///
/// On success the user is loaded and made available to handlers as `AuthUser`.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Err(AuthError::Unauthenticated.into());
    };

    let Some(user_id) = state.session_signer.verify(cookie.value()) else {
        tracing::warn!("Rejected session cookie with invalid signature");
        return Err(AuthError::InvalidSession.into());
    };

    let Some(user) = UserRepository::new(&state.db).find_by_id(user_id).await? else {
        return Err(AuthError::UserNotFound(user_id).into());
    };

    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}
