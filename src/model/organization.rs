use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrganizationDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub share_link_enabled: bool,
    pub public_view_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrganizationDto {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar_url: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddMemberDto {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateMemberRoleDto {
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShareSettingsDto {
    pub share_link_enabled: bool,
    pub share_link_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicViewSettingsDto {
    pub public_view_enabled: bool,
    pub public_view_token: Option<String>,
}

/// Body for toggling either the share link or the public view.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ToggleSettingDto {
    pub enabled: bool,
}

/// Organization fields exposed through a public view token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicOrganizationDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}
