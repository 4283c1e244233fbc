//! Membership factory linking users to organizations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for organization memberships. Defaults to the `member` role.
pub struct OrganizationMemberFactory<'a> {
    db: &'a DatabaseConnection,
    organization_id: Uuid,
    user_id: Uuid,
    role: String,
}

impl<'a> OrganizationMemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, organization_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            organization_id,
            user_id,
            role: "member".to_string(),
        }
    }

    /// Sets the organization role (`owner`, `admin` or `member`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub async fn build(self) -> Result<entity::organization_member::Model, DbErr> {
        entity::organization_member::ActiveModel {
            organization_id: ActiveValue::Set(self.organization_id),
            user_id: ActiveValue::Set(self.user_id),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Adds a user to an organization with the `member` role.
pub async fn create_member(
    db: &DatabaseConnection,
    organization_id: Uuid,
    user_id: Uuid,
) -> Result<entity::organization_member::Model, DbErr> {
    OrganizationMemberFactory::new(db, organization_id, user_id)
        .build()
        .await
}
