use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the database and runs pending migrations.
///
/// Works with any backend sea-orm supports through `DATABASE_URL`; sqlite is used for
/// development and postgres in production. Must complete before the server accepts
/// requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for identity provider calls.
///
/// Redirects are disabled so a token or userinfo endpoint can't bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the Google authorization-code flow.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.google_auth_url.clone())
        .map_err(|e| invalid_url("GOOGLE_AUTH_URL", e))?;
    let token_url = TokenUrl::new(config.google_token_url.clone())
        .map_err(|e| invalid_url("GOOGLE_TOKEN_URL", e))?;
    let redirect_url = RedirectUrl::new(config.google_callback_url.clone())
        .map_err(|e| invalid_url("GOOGLE_CALLBACK_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

fn invalid_url(name: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
