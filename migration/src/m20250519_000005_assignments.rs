use sea_orm_migration::{prelude::*, schema::*};

static IDX_ASSIGNMENTS_CELL: &str = "idx-assignments-cycle_employee_column";
static IDX_ASSIGNMENTS_CYCLE_ID: &str = "idx-assignments-schedule_cycle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(string(Assignments::Id).primary_key())
                    .col(string(Assignments::ScheduleCycleId))
                    .col(string(Assignments::EmployeeId))
                    .col(string(Assignments::ColumnKey))
                    .col(string(Assignments::ValueType))
                    .col(text(Assignments::ValueText))
                    .col(json(Assignments::EntityCodes))
                    .to_owned(),
            )
            .await?;

        // A grid cell may only hold one assignment
        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENTS_CELL)
                    .table(Assignments::Table)
                    .col(Assignments::ScheduleCycleId)
                    .col(Assignments::EmployeeId)
                    .col(Assignments::ColumnKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENTS_CYCLE_ID)
                    .table(Assignments::Table)
                    .col(Assignments::ScheduleCycleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSIGNMENTS_CYCLE_ID)
                    .table(Assignments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSIGNMENTS_CELL)
                    .table(Assignments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Assignments {
    Table,
    Id,
    ScheduleCycleId,
    EmployeeId,
    ColumnKey,
    ValueType,
    ValueText,
    EntityCodes,
}
