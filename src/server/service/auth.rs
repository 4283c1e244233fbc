use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::{organization::OrganizationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        organization::CreateOrganizationParams,
        user::{CreateUserParams, GlobalRole, User},
    },
    state::OAuth2Client,
    util::token::generate_slug,
};

const PERSONAL_WORKSPACE_NAME: &str = "Personal Workspace";

/// Profile returned by the OpenID Connect userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture: String,
}

/// Orchestrates the OAuth2 authorization-code login and user provisioning.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Builds the provider authorization URL carrying `state`.
    pub fn login_url(&self, state: String) -> Url {
        let (authorize_url, _csrf_state) = self
            .oauth_client
            .authorize_url(|| CsrfToken::new(state))
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url();

        authorize_url
    }

    /// Exchanges the authorization code, fetches the user's profile and provisions
    /// the matching local user.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user
    /// - `Err(AppError::AuthErr(TokenExchange))` - Code exchange failed
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    /// - `Err(AppError::DbErr)` - Provisioning failed
    pub async fn callback(&self, code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let profile = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<UserProfile>()
            .await?;

        self.provision(profile).await
    }

    /// Finds or creates the local user for a provider profile.
    ///
    /// New users get the `public` role and a personal workspace they own, written in
    /// one transaction. Existing users have their name and avatar refreshed when the
    /// provider reports different values.
    pub async fn provision(&self, profile: UserProfile) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_email(&profile.email).await? {
            if user.name == profile.name && user.avatar_url == profile.picture {
                return Ok(user);
            }

            let updated = user_repo
                .update_profile(user.id, profile.name, profile.picture)
                .await?;
            return Ok(updated);
        }

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParams {
                email: profile.email,
                name: profile.name,
                role: GlobalRole::Public,
                avatar_url: profile.picture,
            })
            .await?;

        let workspace = OrganizationRepository::new(&txn)
            .create_with_owner(CreateOrganizationParams {
                name: PERSONAL_WORKSPACE_NAME.to_string(),
                slug: generate_slug(PERSONAL_WORKSPACE_NAME, 2),
                owner_id: user.id,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Provisioned user {} with workspace {}",
            user.id,
            workspace.slug
        );

        Ok(user)
    }
}
