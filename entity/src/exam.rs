use sea_orm::entity::prelude::*;

/// A radiology protocol document.
///
/// Nested document fields (variants, notes, code/tag lists and the enabled entity list) are
/// stored as JSON so the record keeps the shape it is edited in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub modality: String,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub enabled_entities: Json,
    #[sea_orm(column_type = "Json")]
    pub notes: Json,
    #[sea_orm(column_type = "Json")]
    pub cpt_codes: Json,
    #[sea_orm(column_type = "Json")]
    pub tags: Json,
    #[sea_orm(column_type = "Json")]
    pub variants: Json,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
