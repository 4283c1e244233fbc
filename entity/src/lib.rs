//! SeaORM entity definitions for every table owned by the application.
//!
//! One module per table. The schema itself is created by the `migration` crate;
//! these definitions must stay in sync with it.

pub mod prelude;

pub mod comment;
pub mod organization;
pub mod organization_member;
pub mod scheduled_task;
pub mod ticket;
pub mod ticket_file;
pub mod user;
