use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::{organization::OrgRole, user::User},
};
use test_utils::{builder::TestBuilder, factory};

mod member_role;
mod require;
