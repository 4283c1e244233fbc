//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input,
//! apply the ticket and organization rules, and own every multi-write transaction.
//! Controllers handle authorization and DTO conversion; services work with domain
//! models only.

pub mod auth;
pub mod comment;
pub mod export;
pub mod organization;
pub mod public_view;
pub mod scheduled_task;
pub mod ticket;

#[cfg(test)]
mod test;
