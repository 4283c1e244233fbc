//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. String-backed columns such as roles, statuses and
//! priorities become enums here.

pub mod comment;
pub mod file;
pub mod organization;
pub mod scheduled_task;
pub mod ticket;
pub mod user;
