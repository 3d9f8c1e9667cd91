use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduleCycles::Table)
                    .if_not_exists()
                    .col(string(ScheduleCycles::Id).primary_key())
                    .col(string(ScheduleCycles::Title))
                    .col(date(ScheduleCycles::StartDate))
                    .col(date(ScheduleCycles::EndDate))
                    .col(date(ScheduleCycles::EffectiveDate))
                    .col(string(ScheduleCycles::Status))
                    .col(text_null(ScheduleCycles::Notes))
                    .col(json(ScheduleCycles::ColumnConfig))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduleCycles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ScheduleCycles {
    Table,
    Id,
    Title,
    StartDate,
    EndDate,
    EffectiveDate,
    Status,
    Notes,
    ColumnConfig,
}
