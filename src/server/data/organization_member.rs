//! Organization membership repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::organization::{parse_stored_role, Member, OrgRole};

pub struct OrganizationMemberRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizationMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the user's role in the organization.
    ///
    /// # Returns
    /// - `Ok(Some(OrgRole))` - User is a member
    /// - `Ok(None)` - User is not a member
    /// - `Err(DbErr)` - Database error or unrecognized stored role
    pub async fn find_role(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<OrgRole>, DbErr> {
        entity::prelude::OrganizationMember::find_by_id((organization_id, user_id))
            .one(self.db)
            .await?
            .map(|membership| parse_stored_role(&membership.role))
            .transpose()
    }

    /// Lists members with their profile fields, ordered by name.
    pub async fn list(&self, organization_id: Uuid) -> Result<Vec<Member>, DbErr> {
        let rows = entity::prelude::OrganizationMember::find()
            .filter(entity::organization_member::Column::OrganizationId.eq(organization_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(membership, user)| user.map(|u| Member::from_entity(membership, u)))
            .collect()
    }

    /// Finds one membership with the user's profile fields.
    pub async fn find(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Member>, DbErr> {
        let Some((membership, Some(user))) =
            entity::prelude::OrganizationMember::find_by_id((organization_id, user_id))
                .find_also_related(entity::prelude::User)
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        Member::from_entity(membership, user).map(Some)
    }

    /// Adds a user to an organization.
    ///
    /// # Returns
    /// - `Ok(())` - Membership created
    /// - `Err(DbErr)` - Insert failed, e.g. the user is already a member
    pub async fn add(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
        role: OrgRole,
    ) -> Result<(), DbErr> {
        entity::organization_member::ActiveModel {
            organization_id: ActiveValue::Set(organization_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Changes a member's role.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Updated membership
    /// - `Ok(None)` - User is not a member of the organization
    pub async fn update_role(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
        role: OrgRole,
    ) -> Result<Option<Member>, DbErr> {
        let Some((membership, Some(user))) =
            entity::prelude::OrganizationMember::find_by_id((organization_id, user_id))
                .find_also_related(entity::prelude::User)
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        let mut active: entity::organization_member::ActiveModel = membership.into();
        active.role = ActiveValue::Set(role.to_string());
        let membership = active.update(self.db).await?;

        Member::from_entity(membership, user).map(Some)
    }

    /// Removes a membership.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - User was not a member
    pub async fn remove(&self, organization_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let Some(membership) =
            entity::prelude::OrganizationMember::find_by_id((organization_id, user_id))
                .one(self.db)
                .await?
        else {
            return Ok(false);
        };

        membership.delete(self.db).await?;

        Ok(true)
    }

    /// Counts the organization's owners.
    ///
    /// The owner rows are selected `FOR UPDATE` where the backend supports row locks,
    /// so inside a transaction a concurrent role change or removal waits until this
    /// one commits and then counts again.
    pub async fn count_owners(&self, organization_id: Uuid) -> Result<u64, DbErr> {
        let owners = entity::prelude::OrganizationMember::find()
            .filter(entity::organization_member::Column::OrganizationId.eq(organization_id))
            .filter(entity::organization_member::Column::Role.eq(OrgRole::Owner.as_str()))
            .lock_exclusive()
            .all(self.db)
            .await?;

        Ok(owners.len() as u64)
    }
}
