use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User,
    m20260901_000002_create_organization_table::Organization,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_uuid(Ticket::Id))
                    .col(uuid(Ticket::OrganizationId))
                    .col(string(Ticket::Title))
                    .col(text(Ticket::Description).default(""))
                    .col(string(Ticket::Location).default(""))
                    .col(string(Ticket::StatusId).default("new"))
                    .col(string(Ticket::PriorityId))
                    .col(uuid(Ticket::ReporterId))
                    .col(uuid_null(Ticket::AssigneeUserId))
                    .col(boolean(Ticket::Sensitive).default(false))
                    .col(
                        timestamp_with_time_zone(Ticket::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Ticket::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Ticket::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_organization_id")
                            .from(Ticket::Table, Ticket::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_reporter_id")
                            .from(Ticket::Table, Ticket::ReporterId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_assignee_user_id")
                            .from(Ticket::Table, Ticket::AssigneeUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_organization_id")
                    .table(Ticket::Table)
                    .col(Ticket::OrganizationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    #[sea_orm(iden = "tickets")]
    Table,
    Id,
    OrganizationId,
    Title,
    Description,
    Location,
    StatusId,
    PriorityId,
    ReporterId,
    AssigneeUserId,
    Sensitive,
    CreatedAt,
    UpdatedAt,
    CompletedAt,
}
