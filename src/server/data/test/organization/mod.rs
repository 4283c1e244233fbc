use crate::server::{
    data::{organization::OrganizationRepository, organization_member::OrganizationMemberRepository},
    model::organization::{CreateOrganizationParams, OrgRole},
};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create_with_owner;
mod find_by_token;
mod list_for_user;
mod update_links;
