use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Productivity::Table)
                    .if_not_exists()
                    .col(string(Productivity::Id).primary_key())
                    .col(string(Productivity::ScheduleCycleId))
                    .col(string(Productivity::EntityCode))
                    .col(integer(Productivity::DarCount))
                    .col(integer(Productivity::IncomingCount))
                    .col(integer_null(Productivity::CpoeCount))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Productivity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Productivity {
    Table,
    Id,
    ScheduleCycleId,
    EntityCode,
    DarCount,
    IncomingCount,
    CpoeCount,
}
