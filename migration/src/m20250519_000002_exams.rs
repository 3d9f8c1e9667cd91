use sea_orm_migration::{prelude::*, schema::*};

static IDX_EXAMS_TITLE: &str = "idx-exams-title";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(string(Exams::Id).primary_key())
                    .col(string(Exams::Title))
                    .col(string(Exams::Slug))
                    .col(string(Exams::Modality))
                    .col(string_null(Exams::ImageUrl))
                    .col(json(Exams::EnabledEntities))
                    .col(json(Exams::Notes))
                    .col(json(Exams::CptCodes))
                    .col(json(Exams::Tags))
                    .col(json(Exams::Variants))
                    .col(timestamp(Exams::CreatedAt))
                    .col(timestamp(Exams::UpdatedAt))
                    .col(integer(Exams::Version))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXAMS_TITLE)
                    .table(Exams::Table)
                    .col(Exams::Title)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_EXAMS_TITLE).table(Exams::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Exams {
    Table,
    Id,
    Title,
    Slug,
    Modality,
    ImageUrl,
    EnabledEntities,
    Notes,
    CptCodes,
    Tags,
    Variants,
    CreatedAt,
    UpdatedAt,
    Version,
}
