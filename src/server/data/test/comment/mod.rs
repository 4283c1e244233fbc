use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list_for_ticket;
