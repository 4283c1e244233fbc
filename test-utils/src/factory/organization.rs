//! Organization factory for creating test organization entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test organizations.
///
/// Share link and public view are disabled by default with no tokens issued.
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    share_link_token: Option<String>,
    public_view_token: Option<String>,
}

impl<'a> OrganizationFactory<'a> {
    /// Defaults:
    /// - name: `"Organization {id}"`
    /// - slug: `"organization-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Organization {}", id),
            slug: format!("organization-{}", id),
            share_link_token: None,
            public_view_token: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Enables the public submission link with the given token.
    pub fn share_link(mut self, token: impl Into<String>) -> Self {
        self.share_link_token = Some(token.into());
        self
    }

    /// Enables the public read-only view with the given token.
    pub fn public_view(mut self, token: impl Into<String>) -> Self {
        self.public_view_token = Some(token.into());
        self
    }

    pub async fn build(self) -> Result<entity::organization::Model, DbErr> {
        let now = Utc::now();
        entity::organization::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            share_link_enabled: ActiveValue::Set(self.share_link_token.is_some()),
            share_link_token: ActiveValue::Set(self.share_link_token),
            public_view_enabled: ActiveValue::Set(self.public_view_token.is_some()),
            public_view_token: ActiveValue::Set(self.public_view_token),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    OrganizationFactory::new(db).build().await
}
