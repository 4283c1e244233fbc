//! Wire DTOs shared by the HTTP API and its OpenAPI documentation.

pub mod api;
pub mod comment;
pub mod health;
pub mod organization;
pub mod scheduled_task;
pub mod ticket;
pub mod user;
