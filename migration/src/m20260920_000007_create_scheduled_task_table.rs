use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_organization_table::Organization;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduledTask::Table)
                    .if_not_exists()
                    .col(pk_uuid(ScheduledTask::Id))
                    .col(uuid(ScheduledTask::OrganizationId))
                    .col(string(ScheduledTask::Title))
                    .col(text(ScheduledTask::Description).default(""))
                    .col(string(ScheduledTask::Frequency))
                    .col(timestamp_with_time_zone(ScheduledTask::StartDate))
                    .col(timestamp_with_time_zone(ScheduledTask::NextRunAt))
                    .col(uuid(ScheduledTask::CreatedBy))
                    .col(uuid_null(ScheduledTask::AssigneeUserId))
                    .col(string(ScheduledTask::PriorityId))
                    .col(string(ScheduledTask::Location).default(""))
                    .col(boolean(ScheduledTask::Enabled).default(true))
                    .col(
                        timestamp_with_time_zone(ScheduledTask::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ScheduledTask::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scheduled_task_organization_id")
                            .from(ScheduledTask::Table, ScheduledTask::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduledTask::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduledTask {
    #[sea_orm(iden = "scheduled_tasks")]
    Table,
    Id,
    OrganizationId,
    Title,
    Description,
    Frequency,
    StartDate,
    NextRunAt,
    CreatedBy,
    AssigneeUserId,
    PriorityId,
    Location,
    Enabled,
    CreatedAt,
    UpdatedAt,
}
