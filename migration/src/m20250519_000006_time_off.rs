use sea_orm_migration::{prelude::*, schema::*};

static IDX_TIME_OFF_EMPLOYEE_ID: &str = "idx-time_off-employee_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeOff::Table)
                    .if_not_exists()
                    .col(string(TimeOff::Id).primary_key())
                    .col(string(TimeOff::EmployeeId))
                    .col(date(TimeOff::StartDate))
                    .col(date(TimeOff::EndDate))
                    .col(string(TimeOff::Type))
                    .col(text_null(TimeOff::Note))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TIME_OFF_EMPLOYEE_ID)
                    .table(TimeOff::Table)
                    .col(TimeOff::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TIME_OFF_EMPLOYEE_ID)
                    .table(TimeOff::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TimeOff::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TimeOff {
    Table,
    Id,
    EmployeeId,
    StartDate,
    EndDate,
    Type,
    Note,
}
