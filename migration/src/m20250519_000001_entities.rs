use sea_orm_migration::{prelude::*, schema::*};

static IDX_ENTITIES_NAME: &str = "idx-entities-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entities::Table)
                    .if_not_exists()
                    .col(string(Entities::Id).primary_key())
                    .col(string(Entities::Name))
                    .col(string(Entities::Code))
                    .col(string_null(Entities::LogoUrl))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENTITIES_NAME)
                    .table(Entities::Table)
                    .col(Entities::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENTITIES_NAME)
                    .table(Entities::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Entities::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Entities {
    Table,
    Id,
    Name,
    Code,
    LogoUrl,
}
