//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Validation, ticket and organization rules, transactions
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Signed-cookie sessions, authorization guard, security headers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, OAuth client, signer)
//! - **Startup** (`startup`) - Database connection, migrations and client setup
//! - **Router** (`router`) - Route table, layers and API documentation
//! - **Utilities** (`util/`) - Recurrence, CSV, tokens and request body parsing
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; authenticated routes pass through `require_session`
//! 2. **Controller** checks membership or role with `AuthGuard`, converts DTOs to params
//! 3. **Service** validates input and applies business rules
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
