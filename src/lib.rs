//! opsdeck: multi-tenant IT ticketing backend.
//!
//! `model` holds the JSON DTOs shared with the web client; `server` holds the HTTP
//! backend and its business logic.

pub mod model;
pub mod server;
