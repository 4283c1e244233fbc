//! User domain models and parameters.
//!
//! Users are global: one account can belong to many organizations. The global role
//! here is independent of the per-organization role in `organization::OrgRole`.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::{
    model::user::{UserDto, UserSummaryDto},
    server::error::AppError,
};

/// Application-wide role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalRole {
    Public,
    Staff,
    Manager,
    Admin,
}

impl GlobalRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Staff => "staff",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for GlobalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlobalRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "staff" => Ok(Self::Staff),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::BadRequest(format!("Invalid role: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: GlobalRole,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == GlobalRole::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.to_string(),
            avatar_url: self.avatar_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn summary_dto(&self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known global role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity
            .role
            .parse::<GlobalRole>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse user role: {}", e)))?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for creating a user on first login, public submission or seeding.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub role: GlobalRole,
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        for role in ["public", "staff", "manager", "admin"] {
            let parsed: GlobalRole = role.parse().unwrap();
            assert_eq!(parsed.as_str(), role);
        }
    }

    #[test]
    fn rejects_organization_role_names() {
        assert!("owner".parse::<GlobalRole>().is_err());
        assert!("member".parse::<GlobalRole>().is_err());
    }
}
