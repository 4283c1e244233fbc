//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. All fields are cheap to clone.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::middleware::session::SessionSigner;

/// OAuth2 client configured with authorization and token endpoints.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for identity provider requests, configured without redirects.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the login flow.
    pub oauth_client: OAuth2Client,

    /// Endpoint returning the signed-in user's OpenID profile.
    pub userinfo_url: String,

    /// Signs and verifies `session_id` cookie values.
    pub session_signer: SessionSigner,

    /// Whether cookies are issued with the `Secure` attribute.
    pub secure_cookies: bool,
}

impl AppState {
    /// Creates the application state from initialized dependencies.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        userinfo_url: String,
        session_signer: SessionSigner,
        secure_cookies: bool,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
            session_signer,
            secure_cookies,
        }
    }
}
