use sea_orm_migration::{prelude::*, schema::*};

use super::m20260902_000004_create_ticket_table::Ticket;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketFile::Table)
                    .if_not_exists()
                    .col(pk_uuid(TicketFile::Id))
                    .col(uuid(TicketFile::TicketId))
                    .col(string(TicketFile::Filename))
                    .col(string(TicketFile::ContentType))
                    .col(big_integer(TicketFile::Size))
                    .col(blob(TicketFile::Data))
                    .col(
                        timestamp_with_time_zone(TicketFile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_file_ticket_id")
                            .from(TicketFile::Table, TicketFile::TicketId)
                            .to(Ticket::Table, Ticket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketFile {
    #[sea_orm(iden = "ticket_files")]
    Table,
    Id,
    TicketId,
    Filename,
    ContentType,
    Size,
    Data,
    CreatedAt,
}
