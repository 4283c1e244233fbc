use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a chosen set of tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Organization, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Organization)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user, organization and membership tables.
    pub fn with_organization_tables(self) -> Self {
        self.with_table(User)
            .with_table(Organization)
            .with_table(OrganizationMember)
    }

    /// Adds every table used by the ticketing workflow in dependency order:
    /// users, organizations, memberships, tickets, ticket files, comments and
    /// scheduled tasks.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_ticketing_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_ticketing_tables(self) -> Self {
        self.with_organization_tables()
            .with_table(Ticket)
            .with_table(TicketFile)
            .with_table(Comment)
            .with_table(ScheduledTask)
    }

    /// Creates the in-memory database and runs every queued CREATE TABLE statement.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
