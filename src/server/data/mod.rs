//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM entity queries for one table each and return domain models
//! from `server::model`. Lookups return `Ok(None)` for missing rows so callers choose
//! the HTTP status. `UserRepository`, `OrganizationRepository`, `TicketRepository` and
//! `TicketFileRepository` are generic over `ConnectionTrait` so services can run them
//! inside a transaction.

pub mod comment;
pub mod organization;
pub mod organization_member;
pub mod scheduled_task;
pub mod ticket;
pub mod ticket_file;
pub mod user;

#[cfg(test)]
mod test;
