//! OpsDeck Test Utils
//!
//! Shared testing utilities for the opsdeck server. Tests build an in-memory SQLite
//! database with just the tables they need and populate it through factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_tickets() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_ticketing_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, org) = factory::helpers::create_org_with_owner(db).await?;
//!     let ticket = factory::create_ticket(db, org.id, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
