use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STATIC_DIR: &str = "web/dist";

pub struct Config {
    pub database_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_callback_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,

    pub session_secret: String,
    /// `false` only when `APP_ENV=development`; controls the cookie `Secure` flag.
    pub secure_cookies: bool,

    pub bind_addr: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_secret = required("SESSION_SECRET")?;
        if session_secret.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "production".to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_callback_url: required("GOOGLE_CALLBACK_URL")?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            google_userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            session_secret,
            secure_cookies: app_env != "development",
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
