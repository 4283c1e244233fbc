//! Organization (tenant) domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::{
    model::{
        organization::{
            MemberDto, OrganizationDto, PublicOrganizationDto, PublicViewSettingsDto,
            ShareSettingsDto,
        },
        user::UserOrganizationDto,
    },
    server::error::AppError,
};

/// Role of a user within a single organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgRole {
    Owner,
    Admin,
    Member,
}

impl OrgRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Owners and admins may change organization settings and membership.
    pub fn can_manage(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }
}

impl fmt::Display for OrgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrgRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(AppError::BadRequest(format!(
                "Invalid organization role: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub share_link_enabled: bool,
    pub share_link_token: Option<String>,
    pub public_view_enabled: bool,
    pub public_view_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    pub fn from_entity(entity: entity::organization::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            share_link_enabled: entity.share_link_enabled,
            share_link_token: entity.share_link_token,
            public_view_enabled: entity.public_view_enabled,
            public_view_token: entity.public_view_token,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> OrganizationDto {
        OrganizationDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            share_link_enabled: self.share_link_enabled,
            public_view_enabled: self.public_view_enabled,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_public_dto(self) -> PublicOrganizationDto {
        PublicOrganizationDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
        }
    }

    pub fn share_settings_dto(&self) -> ShareSettingsDto {
        ShareSettingsDto {
            share_link_enabled: self.share_link_enabled,
            share_link_token: self.share_link_token.clone(),
        }
    }

    pub fn public_view_settings_dto(&self) -> PublicViewSettingsDto {
        PublicViewSettingsDto {
            public_view_enabled: self.public_view_enabled,
            public_view_token: self.public_view_token.clone(),
        }
    }
}

/// An organization together with the requesting user's role in it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserOrganization {
    pub organization: Organization,
    pub role: OrgRole,
}

impl UserOrganization {
    pub fn from_entity(
        membership: entity::organization_member::Model,
        organization: entity::organization::Model,
    ) -> Result<Self, DbErr> {
        let role = parse_stored_role(&membership.role)?;

        Ok(Self {
            organization: Organization::from_entity(organization),
            role,
        })
    }

    pub fn into_dto(self) -> UserOrganizationDto {
        UserOrganizationDto {
            id: self.organization.id,
            name: self.organization.name,
            slug: self.organization.slug,
            role: self.role.to_string(),
            created_at: self.organization.created_at,
            updated_at: self.organization.updated_at,
        }
    }
}

/// Organization member with the user's profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar_url: String,
    pub role: OrgRole,
}

impl Member {
    pub fn from_entity(
        membership: entity::organization_member::Model,
        user: entity::user::Model,
    ) -> Result<Self, DbErr> {
        let role = parse_stored_role(&membership.role)?;

        Ok(Self {
            user_id: user.id,
            email: user.email,
            name: user.name,
            avatar_url: user.avatar_url,
            role,
        })
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            user_id: self.user_id,
            email: self.email,
            name: self.name,
            avatar_url: self.avatar_url,
            role: self.role.to_string(),
        }
    }
}

pub(crate) fn parse_stored_role(role: &str) -> Result<OrgRole, DbErr> {
    role.parse::<OrgRole>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse membership role: {}", e)))
}

/// Parameters for creating an organization. `slug` is already resolved.
#[derive(Debug, Clone)]
pub struct CreateOrganizationParams {
    pub name: String,
    pub slug: String,
    pub owner_id: Uuid,
}
