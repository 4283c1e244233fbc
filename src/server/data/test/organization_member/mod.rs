use crate::server::{data::organization_member::OrganizationMemberRepository, model::organization::OrgRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod add;
mod count_owners;
mod find_role;
mod list;
mod remove;
mod update_role;
