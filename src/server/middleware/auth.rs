use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::organization_member::OrganizationMemberRepository,
    error::{auth::AuthError, AppError},
    model::{organization::OrgRole, user::User},
};

/// Checks an authenticated user may act on a resource.
///
/// Global roles and organization roles are separate axes: a global `admin` is not
/// thereby a member of any organization.
pub enum Permission {
    /// Global `admin` role.
    Admin,
    /// Any membership in the organization.
    OrgMember(Uuid),
    /// `owner` or `admin` membership in the organization.
    OrgManager(Uuid),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    user: &'a User,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, user: &'a User) -> Self {
        Self { db, user }
    }

    /// Requires every permission in order, failing on the first one not held.
    ///
    /// # Returns
    /// - `Ok(())` - All permissions held
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    /// - `Err(AppError::DbErr)` - Membership lookup failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !self.user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            self.user.id,
                            "User attempted an admin action without the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::OrgMember(organization_id) => {
                    if self.member_role(*organization_id).await?.is_none() {
                        return Err(AuthError::AccessDenied(
                            self.user.id,
                            format!(
                                "User is not a member of organization {}",
                                organization_id
                            ),
                        )
                        .into());
                    }
                }
                Permission::OrgManager(organization_id) => {
                    let can_manage = self
                        .member_role(*organization_id)
                        .await?
                        .is_some_and(|role| role.can_manage());

                    if !can_manage {
                        return Err(AuthError::AccessDenied(
                            self.user.id,
                            format!(
                                "User lacks owner or admin role in organization {}",
                                organization_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }

    /// The user's role in an organization, `None` when not a member.
    pub async fn member_role(&self, organization_id: Uuid) -> Result<Option<OrgRole>, AppError> {
        Ok(OrganizationMemberRepository::new(self.db)
            .find_role(organization_id, self.user.id)
            .await?)
    }
}
