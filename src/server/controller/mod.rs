//! HTTP request handlers.
//!
//! Controllers extract request data, check access through `AuthGuard`, convert DTOs
//! into service parameters and shape the response. Each module exposes an OpenAPI
//! tag and `#[utoipa::path]` annotated handlers collected by `router::ApiDoc`.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod health;
pub mod organization;
pub mod public;
pub mod scheduled_task;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;
