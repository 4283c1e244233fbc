//! Organization data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::organization::{
    CreateOrganizationParams, OrgRole, Organization, UserOrganization,
};

pub struct OrganizationRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an organization and its owner membership.
    ///
    /// Both rows are written through the same connection; callers pass a transaction
    /// so the organization never exists without an owner.
    pub async fn create_with_owner(
        &self,
        params: CreateOrganizationParams,
    ) -> Result<Organization, DbErr> {
        let now = Utc::now();
        let organization = entity::organization::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            share_link_enabled: ActiveValue::Set(false),
            share_link_token: ActiveValue::Set(None),
            public_view_enabled: ActiveValue::Set(false),
            public_view_token: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        entity::organization_member::ActiveModel {
            organization_id: ActiveValue::Set(organization.id),
            user_id: ActiveValue::Set(params.owner_id),
            role: ActiveValue::Set(OrgRole::Owner.to_string()),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Organization::from_entity(organization))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>, DbErr> {
        Ok(entity::prelude::Organization::find_by_id(id)
            .one(self.db)
            .await?
            .map(Organization::from_entity))
    }

    /// Finds the organization owning a share link token, regardless of whether sharing
    /// is currently enabled.
    pub async fn find_by_share_token(&self, token: &str) -> Result<Option<Organization>, DbErr> {
        Ok(entity::prelude::Organization::find()
            .filter(entity::organization::Column::ShareLinkToken.eq(token))
            .one(self.db)
            .await?
            .map(Organization::from_entity))
    }

    pub async fn find_by_public_view_token(
        &self,
        token: &str,
    ) -> Result<Option<Organization>, DbErr> {
        Ok(entity::prelude::Organization::find()
            .filter(entity::organization::Column::PublicViewToken.eq(token))
            .one(self.db)
            .await?
            .map(Organization::from_entity))
    }

    /// Lists the organizations a user belongs to with their role in each, by name.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserOrganization>, DbErr> {
        let rows = entity::prelude::OrganizationMember::find()
            .filter(entity::organization_member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Organization)
            .order_by_asc(entity::organization::Column::Name)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(membership, organization)| {
                organization.map(|org| UserOrganization::from_entity(membership, org))
            })
            .collect()
    }

    /// IDs of every organization the user is a member of.
    pub async fn ids_for_user(&self, user_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        let memberships = entity::prelude::OrganizationMember::find()
            .filter(entity::organization_member::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(memberships.into_iter().map(|m| m.organization_id).collect())
    }

    /// Sets the share link flag and token.
    ///
    /// # Returns
    /// - `Ok(Some(Organization))` - Updated organization
    /// - `Ok(None)` - Organization does not exist
    pub async fn update_share_link(
        &self,
        id: Uuid,
        enabled: bool,
        token: Option<String>,
    ) -> Result<Option<Organization>, DbErr> {
        let Some(organization) = entity::prelude::Organization::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::organization::ActiveModel = organization.into();
        active.share_link_enabled = ActiveValue::Set(enabled);
        active.share_link_token = ActiveValue::Set(token);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Organization::from_entity(active.update(self.db).await?)))
    }

    /// Sets the public view flag and token.
    pub async fn update_public_view(
        &self,
        id: Uuid,
        enabled: bool,
        token: Option<String>,
    ) -> Result<Option<Organization>, DbErr> {
        let Some(organization) = entity::prelude::Organization::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::organization::ActiveModel = organization.into();
        active.public_view_enabled = ActiveValue::Set(enabled);
        active.public_view_token = ActiveValue::Set(token);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Organization::from_entity(active.update(self.db).await?)))
    }
}
