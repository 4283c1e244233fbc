use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organization::Table)
                    .if_not_exists()
                    .col(pk_uuid(Organization::Id))
                    .col(string(Organization::Name))
                    .col(string_uniq(Organization::Slug))
                    .col(boolean(Organization::ShareLinkEnabled).default(false))
                    .col(string_null(Organization::ShareLinkToken).unique_key())
                    .col(boolean(Organization::PublicViewEnabled).default(false))
                    .col(string_null(Organization::PublicViewToken).unique_key())
                    .col(
                        timestamp_with_time_zone(Organization::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Organization::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Organization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Organization {
    #[sea_orm(iden = "organizations")]
    Table,
    Id,
    Name,
    Slug,
    ShareLinkEnabled,
    ShareLinkToken,
    PublicViewEnabled,
    PublicViewToken,
    CreatedAt,
    UpdatedAt,
}
