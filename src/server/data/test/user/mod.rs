use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, GlobalRole},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod find_by_email;
mod names_by_ids;
mod update_profile;
