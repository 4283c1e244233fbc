use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        organization::OrganizationRepository,
        organization_member::OrganizationMemberRepository, user::UserRepository,
    },
    error::AppError,
    model::organization::{
        CreateOrganizationParams, Member, OrgRole, Organization, UserOrganization,
    },
    util::token::{generate_slug, generate_token},
};

const LAST_OWNER_MESSAGE: &str = "Organization must retain at least one owner";
const ALREADY_MEMBER_MESSAGE: &str = "User is already a member of this organization";
const SLUG_TAKEN_MESSAGE: &str = "Slug is already taken";

/// Generated slugs are retried on a suffix collision at most this many times.
const SLUG_ATTEMPTS: usize = 5;

/// Which public link a settings operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicLink {
    /// Unauthenticated ticket submission.
    Share,
    /// Unauthenticated read-only ticket view.
    PublicView,
}

pub struct OrganizationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an organization with `owner_id` as its owner in one transaction.
    ///
    /// Without an explicit slug one is derived from the name plus a random suffix,
    /// drawing a new suffix if it collides with an existing slug.
    ///
    /// # Returns
    /// - `Ok(Organization)` - The new organization
    /// - `Err(AppError::BadRequest)` - Blank name or an explicit slug already in use
    pub async fn create(
        &self,
        name: String,
        slug: Option<String>,
        owner_id: Uuid,
    ) -> Result<Organization, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let explicit = slug
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        for _ in 0..SLUG_ATTEMPTS {
            let slug = explicit
                .clone()
                .unwrap_or_else(|| generate_slug(&name, 2));

            match self.insert_with_owner(name.clone(), slug, owner_id).await {
                Err(err) if is_unique_violation(&err) => {
                    if explicit.is_some() {
                        return Err(AppError::BadRequest(SLUG_TAKEN_MESSAGE.to_string()));
                    }
                    tracing::debug!("Generated slug for {:?} collided, retrying", name);
                }
                result => return Ok(result?),
            }
        }

        Err(AppError::InternalError(format!(
            "No free slug for {:?} after {} attempts",
            name, SLUG_ATTEMPTS
        )))
    }

    async fn insert_with_owner(
        &self,
        name: String,
        slug: String,
        owner_id: Uuid,
    ) -> Result<Organization, DbErr> {
        let txn = self.db.begin().await?;
        let organization = OrganizationRepository::new(&txn)
            .create_with_owner(CreateOrganizationParams {
                name,
                slug,
                owner_id,
            })
            .await?;
        txn.commit().await?;

        Ok(organization)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Organization>, AppError> {
        Ok(OrganizationRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserOrganization>, AppError> {
        Ok(OrganizationRepository::new(self.db)
            .list_for_user(user_id)
            .await?)
    }

    pub async fn list_members(&self, organization_id: Uuid) -> Result<Vec<Member>, AppError> {
        Ok(OrganizationMemberRepository::new(self.db)
            .list(organization_id)
            .await?)
    }

    /// Adds an existing user, looked up by email, as a plain member.
    ///
    /// # Returns
    /// - `Ok(Member)` - The new membership
    /// - `Err(AppError::NotFound)` - No user with that email has signed in yet
    /// - `Err(AppError::BadRequest)` - User is already a member
    pub async fn add_member(&self, organization_id: Uuid, email: &str) -> Result<Member, AppError> {
        let member_repo = OrganizationMemberRepository::new(self.db);

        let user = UserRepository::new(self.db)
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("User must register first".to_string()))?;

        if member_repo.find_role(organization_id, user.id).await?.is_some() {
            return Err(AppError::BadRequest(ALREADY_MEMBER_MESSAGE.to_string()));
        }

        match member_repo
            .add(organization_id, user.id, OrgRole::Member)
            .await
        {
            Err(err) if is_unique_violation(&err) => {
                return Err(AppError::BadRequest(ALREADY_MEMBER_MESSAGE.to_string()));
            }
            result => result?,
        }

        member_repo
            .find(organization_id, user.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Member not found after insert".to_string()))
    }

    /// Changes a member's role, refusing to demote the only owner.
    ///
    /// The role lookup, the owner count and the write share one transaction.
    pub async fn update_member_role(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
        role: &str,
    ) -> Result<Member, AppError> {
        let role = role.parse::<OrgRole>()?;

        let txn = self.db.begin().await?;
        let member_repo = OrganizationMemberRepository::new(&txn);

        let current = member_repo
            .find_role(organization_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        if current == OrgRole::Owner && role != OrgRole::Owner {
            ensure_another_owner(&member_repo, organization_id).await?;
        }

        let member = member_repo
            .update_role(organization_id, user_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;
        txn.commit().await?;

        Ok(member)
    }

    /// Removes a member, refusing to remove the only owner.
    ///
    /// The role lookup, the owner count and the delete share one transaction.
    pub async fn remove_member(&self, organization_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let member_repo = OrganizationMemberRepository::new(&txn);

        let current = member_repo
            .find_role(organization_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        if current == OrgRole::Owner {
            ensure_another_owner(&member_repo, organization_id).await?;
        }

        member_repo.remove(organization_id, user_id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Enables or disables a public link. Enabling without a token issues one;
    /// disabling keeps the token so re-enabling restores the same link.
    pub async fn set_link_enabled(
        &self,
        organization_id: Uuid,
        link: PublicLink,
        enabled: bool,
    ) -> Result<Organization, AppError> {
        let organization = self.require(organization_id).await?;

        let current = match link {
            PublicLink::Share => organization.share_link_token,
            PublicLink::PublicView => organization.public_view_token,
        };
        let token = match current {
            None if enabled => Some(generate_token()),
            other => other,
        };

        self.write_link(organization_id, link, enabled, token).await
    }

    /// Replaces a public link's token, invalidating the old link.
    pub async fn regenerate_link(
        &self,
        organization_id: Uuid,
        link: PublicLink,
    ) -> Result<Organization, AppError> {
        let organization = self.require(organization_id).await?;

        let enabled = match link {
            PublicLink::Share => organization.share_link_enabled,
            PublicLink::PublicView => organization.public_view_enabled,
        };

        self.write_link(organization_id, link, enabled, Some(generate_token()))
            .await
    }

    async fn write_link(
        &self,
        organization_id: Uuid,
        link: PublicLink,
        enabled: bool,
        token: Option<String>,
    ) -> Result<Organization, AppError> {
        let repo = OrganizationRepository::new(self.db);

        let updated = match link {
            PublicLink::Share => repo.update_share_link(organization_id, enabled, token).await?,
            PublicLink::PublicView => {
                repo.update_public_view(organization_id, enabled, token)
                    .await?
            }
        };

        updated.ok_or_else(|| AppError::NotFound("Organization not found".to_string()))
    }

    async fn require(&self, organization_id: Uuid) -> Result<Organization, AppError> {
        self.get(organization_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))
    }
}

async fn ensure_another_owner<C: ConnectionTrait>(
    member_repo: &OrganizationMemberRepository<'_, C>,
    organization_id: Uuid,
) -> Result<(), AppError> {
    if member_repo.count_owners(organization_id).await? <= 1 {
        return Err(AppError::BadRequest(LAST_OWNER_MESSAGE.to_string()));
    }

    Ok(())
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
