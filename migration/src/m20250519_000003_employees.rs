use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(string(Employees::Id).primary_key())
                    .col(string(Employees::Name))
                    .col(string(Employees::RoleLevel))
                    .col(boolean(Employees::Active))
                    .col(json(Employees::Training))
                    .col(date_null(Employees::HireDate))
                    .col(date_null(Employees::EndDate))
                    .col(text_null(Employees::Notes))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    Name,
    RoleLevel,
    Active,
    Training,
    HireDate,
    EndDate,
    Notes,
}
