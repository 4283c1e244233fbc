pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_organization_table;
mod m20260901_000003_create_organization_member_table;
mod m20260902_000004_create_ticket_table;
mod m20260902_000005_create_ticket_file_table;
mod m20260915_000006_create_comment_table;
mod m20260920_000007_create_scheduled_task_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_organization_table::Migration),
            Box::new(m20260901_000003_create_organization_member_table::Migration),
            Box::new(m20260902_000004_create_ticket_table::Migration),
            Box::new(m20260902_000005_create_ticket_file_table::Migration),
            Box::new(m20260915_000006_create_comment_table::Migration),
            Box::new(m20260920_000007_create_scheduled_task_table::Migration),
        ]
    }
}
